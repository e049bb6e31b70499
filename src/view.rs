// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! View parameters: everything needed to render exactly one frame.

use crate::errors::BrotError;
use num::Complex;

/// The size of the text grid, the iteration limit, and the rectangle
/// of the complex plane the grid covers.  Row 0 of the grid sits at
/// `y_min`; column 0 sits at `x_min`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct View {
    /// Characters per line
    pub width: usize,
    /// Number of lines
    pub height: usize,
    /// Iteration limit per point
    pub max_iter: usize,
    /// Real part of the left edge
    pub x_min: f64,
    /// Real part of the right edge
    pub x_max: f64,
    /// Imaginary part of the top line
    pub y_min: f64,
    /// Imaginary part of the bottom line
    pub y_max: f64,
}

impl Default for View {
    /// The whole set at 80x40 with 100 iterations.
    fn default() -> Self {
        View {
            width: 80,
            height: 40,
            max_iter: 100,
            x_min: -2.5,
            x_max: 1.0,
            y_min: -1.25,
            y_max: 1.25,
        }
    }
}

impl View {
    /// A square window of side `2.0 / zoom` centered on `center`.
    pub fn zoom(
        width: usize,
        height: usize,
        max_iter: usize,
        center: Complex<f64>,
        zoom: f64,
    ) -> View {
        let half = 2.0 / zoom / 2.0;
        View {
            width,
            height,
            max_iter,
            x_min: center.re - half,
            x_max: center.re + half,
            y_min: center.im - half,
            y_max: center.im + half,
        }
    }

    /// The corner at column 0, row 0.
    pub fn min_corner(&self) -> Complex<f64> {
        Complex::new(self.x_min, self.y_min)
    }

    /// The corner at the last column of the last row.
    pub fn max_corner(&self) -> Complex<f64> {
        Complex::new(self.x_max, self.y_max)
    }

    /// Checks that a frame can be rendered from these parameters.
    pub fn validate(&self) -> Result<(), BrotError> {
        if self.width < 2 || self.height < 2 {
            return Err(BrotError::TooSmall {
                width: self.width as i64,
                height: self.height as i64,
            });
        }
        if self.max_iter == 0 {
            return Err(BrotError::ZeroIterations);
        }
        let bounds = [self.x_min, self.x_max, self.y_min, self.y_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(BrotError::NonFiniteBounds(
                self.x_min, self.x_max, self.y_min, self.y_max,
            ));
        }
        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(BrotError::InvertedBounds(
                self.x_min, self.x_max, self.y_min, self.y_max,
            ));
        }
        Ok(())
    }

    /// The three descriptive lines, followed by a blank line, that
    /// precede a frame.
    pub fn header(&self) -> String {
        format!(
            "Mandelbrot Set ASCII Art ({}x{})\nRange: x[{:.2}, {:.2}], y[{:.2}, {:.2}]\nMax iterations: {}\n\n",
            self.width, self.height, self.x_min, self.x_max, self.y_min, self.y_max, self.max_iter
        )
    }
}
