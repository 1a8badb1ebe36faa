use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;

/// Maps a (possibly fractional) pixel position to world coordinates.
///
/// The canvas center `(width/2, height/2)` maps exactly to the view center.
/// Both axes use the same world-per-pixel step so the plane is never
/// stretched.
#[must_use]
pub fn pixel_to_world(view: &ViewState, px: f64, py: f64) -> Complex {
    let step = view.pixel_size();
    let half_width = f64::from(view.canvas_width()) / 2.0;
    let half_height = f64::from(view.canvas_height()) / 2.0;

    Complex {
        real: (px - half_width) * step + view.center_x(),
        imag: (py - half_height) * step + view.center_y(),
    }
}

/// Inverse of [`pixel_to_world`]; the result may lie outside the canvas.
#[must_use]
pub fn world_to_pixel(view: &ViewState, point: Complex) -> (f64, f64) {
    let step = view.pixel_size();
    let half_width = f64::from(view.canvas_width()) / 2.0;
    let half_height = f64::from(view.canvas_height()) / 2.0;

    (
        (point.real - view.center_x()) / step + half_width,
        (point.imag - view.center_y()) / step + half_height,
    )
}
