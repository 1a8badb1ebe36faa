use std::ops::ControlFlow;

use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

/// Iteration value for points that never escaped within the budget.
///
/// Escape indices are always `>= 0`, so `-1` can never be mistaken for one.
pub const UNESCAPED: i32 = -1;

/// `|z|² > 4` is the same test as `|z| > 2` without the square root.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KernelError {
    #[error("pixel ({}, {}) is outside the {width}x{height} canvas", .pixel.x, .pixel.y)]
    PixelOutsideCanvas { pixel: Point, width: u32, height: u32 },
    #[error("pixel ({}, {}) maps to a non-finite point ({}, {})", .pixel.x, .pixel.y, .point.real, .point.imag)]
    NonFinitePoint { pixel: Point, point: Complex },
}

/// Iterates `z ← z² + c` from `z0` and returns the index of the first orbit
/// point outside the escape radius, or [`UNESCAPED`].
///
/// Index `n` refers to the point produced by the `n`-th application of the
/// update rule, counting from zero.
#[inline]
#[must_use]
pub fn escape_time(z0: Complex, c: Complex, max_iterations: u32) -> i32 {
    let limit = i32::try_from(max_iterations).unwrap_or(i32::MAX);

    let orbit = (0..limit).try_fold(z0, |z, iteration| {
        let next = z.square_add(c);
        let magnitude_squared = next.magnitude_squared();

        // NaN from an overflowed orbit has left the disc too
        if magnitude_squared > ESCAPE_RADIUS_SQUARED || magnitude_squared.is_nan() {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match orbit {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => UNESCAPED,
    }
}

#[must_use]
pub fn mandelbrot(c: Complex, max_iterations: u32) -> i32 {
    escape_time(Complex::ZERO, c, max_iterations)
}

#[must_use]
pub fn julia(z0: Complex, c: Complex, max_iterations: u32) -> i32 {
    escape_time(z0, c, max_iterations)
}
