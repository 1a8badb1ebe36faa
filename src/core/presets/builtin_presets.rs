use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::presets::errors::PresetError;
use crate::core::presets::preset_record::PresetRecord;

fn mandelbrot(name: &str, center_x: f64, center_y: f64, zoom: f64, max_iterations: u32) -> PresetRecord {
    PresetRecord {
        name: name.to_owned(),
        fractal_kind: FractalKind::Mandelbrot,
        center_x,
        center_y,
        zoom,
        max_iterations,
        c_real: None,
        c_imag: None,
    }
}

fn julia(name: &str, c_real: f64, c_imag: f64, zoom: f64, max_iterations: u32) -> PresetRecord {
    PresetRecord {
        name: name.to_owned(),
        fractal_kind: FractalKind::Julia,
        center_x: 0.0,
        center_y: 0.0,
        zoom,
        max_iterations,
        c_real: Some(c_real),
        c_imag: Some(c_imag),
    }
}

#[must_use]
pub fn builtin_presets() -> Vec<PresetRecord> {
    vec![
        mandelbrot("Classic Mandelbrot", -0.5, 0.0, 1.0, 256),
        mandelbrot("Mandelbrot spirals", -0.743, 0.126, 200.0, 512),
        mandelbrot("Mandelbrot islands", -1.25, 0.02, 80.0, 300),
        julia("Julia dragon", -0.7269, 0.1889, 1.2, 300),
        julia("Julia lace", -0.4, 0.6, 1.5, 400),
        julia("Julia snowflakes", 0.285, 0.01, 1.8, 350),
        julia("Julia fire flower", -0.8, 0.156, 1.3, 280),
        julia("Julia cosmic spiral", -0.70176, -0.3842, 1.6, 320),
    ]
}

/// Looks a built-in preset up by name, ignoring case.
pub fn find_builtin(name: &str) -> Result<PresetRecord, PresetError> {
    builtin_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| PresetError::UnknownPreset(name.to_owned()))
}
