use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::escape_time::{KernelError, mandelbrot};
use crate::core::util::pixel_to_world::pixel_to_world;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    view: ViewState,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(view: ViewState) -> Self {
        Self { view }
    }
}

/// Maps a canvas pixel to its world point, rejecting pixels off the canvas and
/// points that overflowed to NaN or infinity.
pub(crate) fn mapped_point(view: &ViewState, pixel: Point) -> Result<Complex, KernelError> {
    if pixel.x >= view.canvas_width() || pixel.y >= view.canvas_height() {
        return Err(KernelError::PixelOutsideCanvas {
            pixel,
            width: view.canvas_width(),
            height: view.canvas_height(),
        });
    }

    let point = pixel_to_world(view, f64::from(pixel.x), f64::from(pixel.y));

    if !point.is_finite() {
        return Err(KernelError::NonFinitePoint { pixel, point });
    }

    Ok(point)
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = i32;
    type Failure = KernelError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = mapped_point(&self.view, pixel)?;

        Ok(mandelbrot(c, self.view.max_iterations()))
    }

    fn width(&self) -> u32 {
        self.view.canvas_width()
    }

    fn height(&self) -> u32 {
        self.view.canvas_height()
    }
}
