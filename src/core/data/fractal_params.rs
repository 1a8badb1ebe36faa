use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::fractal_kinds::FractalKind;

/// The iteration rule, with the constant Julia needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fractal {
    Mandelbrot,
    Julia { c: Complex },
}

impl Fractal {
    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Julia { .. } => FractalKind::Julia,
        }
    }

    #[must_use]
    pub fn julia_constant(&self) -> Option<Complex> {
        match self {
            Self::Mandelbrot => None,
            Self::Julia { c } => Some(*c),
        }
    }
}

/// A validated snapshot of everything one generation computes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    pub fractal: Fractal,
    pub view: ViewState,
}

impl FractalParams {
    #[must_use]
    pub fn new(fractal: Fractal, view: ViewState) -> Self {
        Self { fractal, view }
    }

    #[must_use]
    pub fn with_view(self, view: ViewState) -> Self {
        Self { view, ..self }
    }
}
