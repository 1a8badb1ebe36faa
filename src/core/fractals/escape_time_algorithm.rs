use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::fractal_params::{Fractal, FractalParams};
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::escape_time::KernelError;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Kernel selected by a request's fractal kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeTimeAlgorithm {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(fractal: Fractal, view: ViewState) -> Self {
        match fractal {
            Fractal::Mandelbrot => Self::Mandelbrot(MandelbrotAlgorithm::new(view)),
            Fractal::Julia { c } => Self::Julia(JuliaAlgorithm::new(view, c)),
        }
    }

    #[must_use]
    pub fn from_params(params: &FractalParams) -> Self {
        Self::new(params.fractal, params.view)
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = i32;
    type Failure = KernelError;

    #[inline]
    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.compute(pixel),
            Self::Julia(algorithm) => algorithm.compute(pixel),
        }
    }

    fn width(&self) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.width(),
            Self::Julia(algorithm) => algorithm.width(),
        }
    }

    fn height(&self) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.height(),
            Self::Julia(algorithm) => algorithm.height(),
        }
    }
}
