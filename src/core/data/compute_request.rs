use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::{Fractal, FractalParams};
use crate::core::data::validation::ValidationError;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Unvalidated compute request as it arrives from a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputeRequest {
    pub fractal_kind: FractalKind,
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_real: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_imag: Option<f64>,
}

impl ComputeRequest {
    pub fn validate(&self) -> Result<FractalParams, ValidationError> {
        let fractal = match self.fractal_kind {
            FractalKind::Mandelbrot => Fractal::Mandelbrot,
            FractalKind::Julia => {
                let (Some(c_real), Some(c_imag)) = (self.c_real, self.c_imag) else {
                    return Err(ValidationError::MissingJuliaConstant);
                };

                if !c_real.is_finite() || !c_imag.is_finite() {
                    return Err(ValidationError::NonFiniteJuliaConstant { c_real, c_imag });
                }

                Fractal::Julia {
                    c: Complex::new(c_real, c_imag),
                }
            }
        };

        let view = ViewState::new(
            self.center_x,
            self.center_y,
            self.zoom,
            self.width,
            self.height,
            self.max_iterations,
        )?;

        Ok(FractalParams::new(fractal, view))
    }
}

impl From<FractalParams> for ComputeRequest {
    fn from(params: FractalParams) -> Self {
        let view = params.view;
        let c = params.fractal.julia_constant();

        Self {
            fractal_kind: params.fractal.kind(),
            center_x: view.center_x(),
            center_y: view.center_y(),
            zoom: view.zoom(),
            width: view.canvas_width(),
            height: view.canvas_height(),
            max_iterations: view.max_iterations(),
            c_real: c.map(|c| c.real),
            c_imag: c.map(|c| c.imag),
        }
    }
}

impl TryFrom<ComputeRequest> for FractalParams {
    type Error = ValidationError;

    fn try_from(request: ComputeRequest) -> Result<Self, Self::Error> {
        request.validate()
    }
}
