use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::escape_time::{KernelError, julia};
use crate::core::fractals::mandelbrot::algorithm::mapped_point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    view: ViewState,
    c: Complex,
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(view: ViewState, c: Complex) -> Self {
        Self { view, c }
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.c
    }
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = i32;
    type Failure = KernelError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z0 = mapped_point(&self.view, pixel)?;

        Ok(julia(z0, self.c, self.view.max_iterations()))
    }

    fn width(&self) -> u32 {
        self.view.canvas_width()
    }

    fn height(&self) -> u32 {
        self.view.canvas_height()
    }
}
