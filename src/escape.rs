// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  Takes a point on the complex plane and
//! repeatedly squares-and-adds starting from zero, measuring how many
//! steps the orbit takes to leave the circle of radius 2.  Points
//! whose orbit never leaves are presumed to be in the Mandelbrot set.

use num::Complex;

/// The square of the escape radius.  We compare against `norm_sqr()`
/// so no square root is ever taken.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Returns the number of completed iterations before the orbit of `c`
/// escaped, or `limit` if it never did.  The magnitude is tested
/// before each update, so the result is always at least 1 when
/// `limit` is non-zero.
#[inline]
pub fn escape_time(c: Complex<f64>, limit: usize) -> usize {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 0..limit {
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            return i;
        }
        z = z * z + c;
    }
    limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for limit in &[1, 2, 10, 100, 1000] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), *limit), *limit);
        }
    }

    #[test]
    fn points_outside_radius_two_escape() {
        let points = [
            Complex::new(2.01, 0.0),
            Complex::new(-2.5, 0.0),
            Complex::new(0.0, 3.0),
            Complex::new(1.5, -1.5),
            Complex::new(-100.0, 100.0),
        ];
        for c in points.iter() {
            for limit in &[2, 50, 500] {
                assert!(escape_time(*c, *limit) < *limit, "{} did not escape", c);
            }
        }
    }

    #[test]
    fn one_escapes_on_the_third_step() {
        // 0 -> 1 -> 2 -> 5; |2|^2 is exactly 4 and does not count.
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 100), 3);
    }

    #[test]
    fn period_two_bulb_stays_bounded() {
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 500), 500);
    }

    #[test]
    fn zero_limit_returns_zero() {
        assert_eq!(escape_time(Complex::new(5.0, 5.0), 0), 0);
    }
}
