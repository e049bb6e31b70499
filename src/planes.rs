// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a grid of character cells with an origin at 0,0, and a
//! rectangle on the complex plane given by its minimum and maximum
//! corners.  The first and last cells of each axis land exactly on
//! the rectangle's edges.
use crate::errors::BrotError;
use itertools::iproduct;
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the minimum and maximum corners of the complex plane,
/// treating the real part of each value as the x-component and the
/// imaginary part of each value as the y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the column, row of a cell in the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps cells of the integral plane to points on the complex plane.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The size of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The two corners defining the complex cartesian plane, minimum
    /// and maximum.
    pub complex_plane: ComplexPlane,
    // Extent of the complex rectangle along each axis.
    spans: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane, and the two
    /// corners of the complex plane.  Both axes of the integral plane
    /// need at least two cells, since the outermost cells are pinned
    /// to the edges of the complex rectangle.
    pub fn new(
        width: usize,
        height: usize,
        min: Complex<f64>,
        max: Complex<f64>,
    ) -> Result<PlaneMapper, BrotError> {
        if width < 2 || height < 2 {
            return Err(BrotError::TooSmall {
                width: width as i64,
                height: height as i64,
            });
        }

        if max.re <= min.re || max.im <= min.im {
            return Err(BrotError::InvertedBounds(min.re, max.re, min.im, max.im));
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(min, max),
            spans: (max.re - min.re, max.im - min.im),
        })
    }

    /// The total number of cells in the integral grid.
    pub(crate) fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Given a cell on the integral plane, return the point on the
    /// complex plane it samples.  The product is taken before the
    /// division so that identical parameters always give bit-identical
    /// points.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let min = self.complex_plane.0;
        Complex::new(
            min.re + (pixel.0 as f64) * self.spans.0 / ((self.integral_plane.0 - 1) as f64),
            min.im + (pixel.1 as f64) * self.spans.1 / ((self.integral_plane.1 - 1) as f64),
        )
    }

    /// Every cell of a single row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Pixel> {
        (0..self.integral_plane.0).map(move |column| Pixel(column, row))
    }

    /// Every cell of the grid, top to bottom, left to right.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> {
        iproduct!(0..self.integral_plane.1, 0..self.integral_plane.0)
            .map(|(row, column)| Pixel(column, row))
    }
}
