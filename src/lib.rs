#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot ASCII art renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the orbit of zero under `z -> z*z + c` stays bounded.
//! For every point we measure how many steps the orbit takes to leave
//! the circle of radius 2 (its "escape time"), and draw that count as
//! one of ten characters, from a blank for points that leave at once
//! to `@` for points that never leave within the iteration limit.
//!
//! A grid of such characters, one per cell, row by row, is a frame.
//! Frames can be printed, appended to a gallery file, or served over
//! HTTP.

extern crate chrono;
extern crate crossbeam;
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;
extern crate rand;
extern crate tiny_http;
extern crate url;

pub mod errors;
pub mod escape;
pub mod gallery;
pub mod gradient;
pub mod planes;
pub mod presets;
pub mod render;
pub mod server;
pub mod view;

pub use errors::BrotError;
pub use escape::escape_time;
pub use gallery::Gallery;
pub use gradient::iter_to_char;
pub use render::{zoom_view, AsciiRenderer};
pub use view::View;
