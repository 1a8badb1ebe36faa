use crate::core::config::navigation_settings::NavigationSettings;
use crate::core::data::complex::Complex;
use crate::core::data::validation::ValidationError;
use crate::core::data::view_state::ViewState;
use crate::core::util::pixel_to_world::pixel_to_world;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyZoom {
    In,
    Out,
}

/// Owns the current view and applies navigation transitions to it.
///
/// Every transition either yields a new valid view or leaves the current one
/// untouched and reports why.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    view: ViewState,
    settings: NavigationSettings,
}

impl Navigator {
    pub fn new(settings: NavigationSettings) -> Result<Self, ValidationError> {
        Ok(Self {
            view: settings.default_view.to_view_state()?,
            settings,
        })
    }

    #[must_use]
    pub fn with_view(view: ViewState, settings: NavigationSettings) -> Self {
        Self { view, settings }
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn settings(&self) -> &NavigationSettings {
        &self.settings
    }

    /// Centers on the world point under `(px, py)` and zooms in by the click factor.
    pub fn zoom_to_point(&mut self, px: f64, py: f64) -> Result<ViewState, ValidationError> {
        let target = pixel_to_world(&self.view, px, py);
        let next = self
            .view
            .with_center(target)?
            .with_zoom(self.view.zoom() * self.settings.click_zoom)?;

        Ok(self.apply(next))
    }

    /// Moves the view so the content follows a drag of `(dx, dy)` pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<ViewState, ValidationError> {
        let pixel_size = self.view.pixel_size();
        let center = Complex::new(
            self.view.center_x() - dx * pixel_size,
            self.view.center_y() - dy * pixel_size,
        );
        let next = self.view.with_center(center)?;

        Ok(self.apply(next))
    }

    pub fn wheel_zoom(&mut self, direction: WheelDirection) -> Result<ViewState, ValidationError> {
        let factor = match direction {
            WheelDirection::In => self.settings.wheel_zoom_in,
            WheelDirection::Out => self.settings.wheel_zoom_out,
        };

        self.zoom_at_center(factor)
    }

    pub fn key_zoom(&mut self, direction: KeyZoom) -> Result<ViewState, ValidationError> {
        let factor = match direction {
            KeyZoom::In => self.settings.key_zoom_in,
            KeyZoom::Out => self.settings.key_zoom_out,
        };

        self.zoom_at_center(factor)
    }

    pub fn zoom_at_center(&mut self, factor: f64) -> Result<ViewState, ValidationError> {
        let next = self.view.with_zoom(self.view.zoom() * factor)?;

        Ok(self.apply(next))
    }

    /// Restores the default center and zoom; canvas size and iteration limit stay.
    pub fn reset(&mut self) -> Result<ViewState, ValidationError> {
        let home = self.settings.default_view;
        let next = ViewState::new(
            home.center_x,
            home.center_y,
            home.zoom,
            self.view.canvas_width(),
            self.view.canvas_height(),
            self.view.max_iterations(),
        )?;

        Ok(self.apply(next))
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<ViewState, ValidationError> {
        let next = self.view.with_canvas_size(width, height)?;

        Ok(self.apply(next))
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<ViewState, ValidationError> {
        let next = self.view.with_max_iterations(max_iterations)?;

        Ok(self.apply(next))
    }

    /// Replaces the view wholesale, e.g. when a preset is loaded.
    pub fn set_view(&mut self, view: ViewState) -> ViewState {
        self.apply(view)
    }

    fn apply(&mut self, next: ViewState) -> ViewState {
        self.view = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(width: u32, height: u32) -> Navigator {
        let view = ViewState::new(-0.5, 0.0, 1.0, width, height, 256).unwrap();
        Navigator::with_view(view, NavigationSettings::default())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-12, "{} != {}", actual, expected);
    }

    #[test]
    fn test_new_uses_default_view() {
        let navigator = Navigator::new(NavigationSettings::default()).unwrap();

        assert_eq!(navigator.view().center(), Complex::new(-0.5, 0.0));
        assert_eq!(navigator.view().canvas_width(), 800);
    }

    #[test]
    fn test_zoom_to_center_pixel_keeps_center() {
        let mut navigator = navigator(800, 600);

        let view = navigator.zoom_to_point(400.0, 300.0).unwrap();

        assert_eq!(view.center(), Complex::new(-0.5, 0.0));
        assert_eq!(view.zoom(), 1.5);
    }

    #[test]
    fn test_two_clicks_compound_zoom() {
        let mut navigator = navigator(800, 600);

        navigator.zoom_to_point(400.0, 300.0).unwrap();
        let view = navigator.zoom_to_point(400.0, 300.0).unwrap();

        assert_eq!(view.zoom(), 2.25);
    }

    #[test]
    fn test_zoom_to_corner_recenters_on_it() {
        let mut navigator = navigator(200, 100);

        let view = navigator.zoom_to_point(0.0, 0.0).unwrap();

        assert_close(view.center_x(), -1.5);
        assert_close(view.center_y(), -0.5);
    }

    #[test]
    fn test_pan_moves_against_drag() {
        let mut navigator = navigator(200, 100);

        // one pixel is 0.01 world units at zoom 1 on a 200 wide canvas
        let view = navigator.pan(10.0, -20.0).unwrap();

        assert_close(view.center_x(), -0.6);
        assert_close(view.center_y(), 0.2);
        assert_eq!(view.zoom(), 1.0);
    }

    #[test]
    fn test_wheel_zoom_is_asymmetric() {
        let mut navigator = navigator(100, 100);

        navigator.wheel_zoom(WheelDirection::In).unwrap();
        assert_eq!(navigator.view().zoom(), 1.2);

        let view = navigator.wheel_zoom(WheelDirection::Out).unwrap();
        assert_close(view.zoom(), 0.96);
        assert_eq!(view.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_key_zoom_factors() {
        let mut navigator = navigator(100, 100);

        assert_eq!(navigator.key_zoom(KeyZoom::In).unwrap().zoom(), 1.5);
        assert_close(navigator.key_zoom(KeyZoom::Out).unwrap().zoom(), 1.005);
    }

    #[test]
    fn test_reset_restores_center_and_zoom_only() {
        let mut navigator = navigator(320, 200);
        navigator.zoom_to_point(10.0, 10.0).unwrap();
        navigator.set_max_iterations(999).unwrap();

        let view = navigator.reset().unwrap();

        assert_eq!(view.center(), Complex::new(-0.5, 0.0));
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.canvas_width(), 320);
        assert_eq!(view.max_iterations(), 999);
    }

    #[test]
    fn test_resize_keeps_center_and_zoom() {
        let mut navigator = navigator(100, 100);
        navigator.zoom_at_center(4.0).unwrap();

        let view = navigator.resize(640, 480).unwrap();

        assert_eq!(view.zoom(), 4.0);
        assert_eq!((view.canvas_width(), view.canvas_height()), (640, 480));
    }

    #[test]
    fn test_rejected_transition_keeps_view() {
        let mut navigator = navigator(100, 100);
        let before = navigator.view();

        assert!(navigator.resize(0, 100).is_err());
        assert!(navigator.set_max_iterations(0).is_err());
        assert!(navigator.zoom_at_center(-1.0).is_err());
        assert_eq!(navigator.view(), before);
    }
}
