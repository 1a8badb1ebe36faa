use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation driven by the fractal generators.
///
/// Implementations must be pure functions of the pixel so that pixels can be
/// evaluated in any order and on any thread.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    fn width(&self) -> u32;

    fn height(&self) -> u32;
}
