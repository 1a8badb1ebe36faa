use thiserror::Error;

/// Reasons a view or compute request is rejected before any work starts.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("zoom must be a finite value greater than zero, got {0}")]
    InvalidZoom(f64),
    #[error("center must be finite, got ({center_x}, {center_y})")]
    NonFiniteCenter { center_x: f64, center_y: f64 },
    #[error("canvas size must be positive: {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("julia requests require both c_real and c_imag")]
    MissingJuliaConstant,
    #[error("julia constant must be finite, got ({c_real}, {c_imag})")]
    NonFiniteJuliaConstant { c_real: f64, c_imag: f64 },
    #[error("world bounds must have positive extent: x {x_min}..{x_max}, y {y_min}..{y_max}")]
    EmptyBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}
