use serde::{Deserialize, Serialize};

use crate::core::data::compute_request::ComputeRequest;
use crate::core::data::fractal_params::FractalParams;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::presets::errors::PresetError;

/// A named view, independent of canvas size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetRecord {
    pub name: String,
    #[serde(alias = "fractal_type")]
    pub fractal_kind: FractalKind,
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
    pub max_iterations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_real: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_imag: Option<f64>,
}

impl PresetRecord {
    /// Captures the view of `params`; the canvas size is not part of a preset.
    #[must_use]
    pub fn from_params(name: impl Into<String>, params: &FractalParams) -> Self {
        let request = ComputeRequest::from(*params);

        Self {
            name: name.into(),
            fractal_kind: request.fractal_kind,
            center_x: request.center_x,
            center_y: request.center_y,
            zoom: request.zoom,
            max_iterations: request.max_iterations,
            c_real: request.c_real,
            c_imag: request.c_imag,
        }
    }

    #[must_use]
    pub fn to_request(&self, width: u32, height: u32) -> ComputeRequest {
        ComputeRequest {
            fractal_kind: self.fractal_kind,
            center_x: self.center_x,
            center_y: self.center_y,
            zoom: self.zoom,
            width,
            height,
            max_iterations: self.max_iterations,
            c_real: self.c_real,
            c_imag: self.c_imag,
        }
    }

    pub fn to_params(&self, width: u32, height: u32) -> Result<FractalParams, PresetError> {
        self.to_request(width, height)
            .validate()
            .map_err(|source| PresetError::Invalid {
                name: self.name.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::fractal_params::Fractal;
    use crate::core::data::validation::ValidationError;
    use crate::core::data::view_state::ViewState;

    #[test]
    fn test_round_trips_through_params() {
        let view = ViewState::new(0.1, -0.2, 12.0, 640, 480, 300).unwrap();
        let params = FractalParams::new(
            Fractal::Julia {
                c: Complex::new(0.285, 0.01),
            },
            view,
        );

        let preset = PresetRecord::from_params("snow", &params);

        assert_eq!(preset.to_params(640, 480).unwrap(), params);
    }

    #[test]
    fn test_canvas_size_comes_from_caller() {
        let preset = PresetRecord {
            name: "wide".to_owned(),
            fractal_kind: FractalKind::Mandelbrot,
            center_x: -0.5,
            center_y: 0.0,
            zoom: 1.0,
            max_iterations: 100,
            c_real: None,
            c_imag: None,
        };

        let request = preset.to_request(1920, 1080);

        assert_eq!((request.width, request.height), (1920, 1080));
    }

    #[test]
    fn test_julia_preset_without_constant_is_invalid() {
        let preset = PresetRecord {
            name: "broken".to_owned(),
            fractal_kind: FractalKind::Julia,
            center_x: 0.0,
            center_y: 0.0,
            zoom: 1.0,
            max_iterations: 100,
            c_real: Some(0.1),
            c_imag: None,
        };

        assert!(matches!(
            preset.to_params(10, 10),
            Err(PresetError::Invalid {
                source: ValidationError::MissingJuliaConstant,
                ..
            })
        ));
    }

    #[test]
    fn test_accepts_legacy_field_name() {
        let json = r#"{
            "name": "Spirals", "fractal_type": "Mandelbrot",
            "center_x": -0.743, "center_y": 0.126, "zoom": 200.0, "max_iterations": 512
        }"#;

        let preset: PresetRecord = serde_json::from_str(json).unwrap();

        assert_eq!(preset.fractal_kind, FractalKind::Mandelbrot);
        assert_eq!(preset.c_real, None);
    }
}
