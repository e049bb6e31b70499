// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by the renderer, the gallery and the server.

use failure::Fail;
use std::io;
use std::string::FromUtf8Error;

/// Everything that can go wrong between receiving view parameters and
/// delivering a frame.
#[derive(Debug, Fail)]
pub enum BrotError {
    /// The pixel grid must be at least 2x2, as the coordinate mapping
    /// divides by `width - 1` and `height - 1`.
    #[fail(display = "grid of {}x{} is too small; width and height must be at least 2", width, height)]
    TooSmall {
        /// Requested width
        width: i64,
        /// Requested height
        height: i64,
    },

    /// A render needs at least one iteration.
    #[fail(display = "maximum iteration count must be greater than zero")]
    ZeroIterations,

    /// Bounds must be finite real numbers.
    #[fail(display = "bounds x[{}, {}], y[{}, {}] are not finite", _0, _1, _2, _3)]
    NonFiniteBounds(f64, f64, f64, f64),

    /// The minimum corner must lie strictly left of and below the
    /// maximum corner.
    #[fail(display = "bounds x[{}, {}], y[{}, {}] are empty or inverted", _0, _1, _2, _3)]
    InvertedBounds(f64, f64, f64, f64),

    /// A request asked for more work than the server will do.
    #[fail(display = "{} of {} exceeds the limit of {}", name, value, limit)]
    OverLimit {
        /// Parameter name
        name: &'static str,
        /// Requested value
        value: i64,
        /// Largest accepted value
        limit: i64,
    },

    /// No preset with the given name exists.
    #[fail(display = "unknown preset '{}'", _0)]
    UnknownPreset(String),

    /// A render worker thread panicked.
    #[fail(display = "a render worker panicked")]
    WorkerPanic,

    /// The frame was not valid UTF-8.
    #[fail(display = "rendered frame is not valid UTF-8: {}", _0)]
    Encoding(#[cause] FromUtf8Error),

    /// The HTTP listener could not be started.
    #[fail(display = "could not start server on {}: {}", _0, _1)]
    Server(String, String),

    /// Reading or writing the gallery, or writing to a sink, failed.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for BrotError {
    fn from(err: io::Error) -> Self {
        BrotError::Io(err)
    }
}

impl From<FromUtf8Error> for BrotError {
    fn from(err: FromUtf8Error) -> Self {
        BrotError::Encoding(err)
    }
}
