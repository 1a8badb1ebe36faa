use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::data::validation::ValidationError;
use crate::core::data::view_state::ViewState;

/// Where a reset returns to and what a fresh session shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultView {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
}

impl Default for DefaultView {
    fn default() -> Self {
        Self {
            center_x: -0.5,
            center_y: 0.0,
            zoom: 1.0,
            width: 800,
            height: 600,
            max_iterations: 256,
        }
    }
}

impl DefaultView {
    pub fn to_view_state(&self) -> Result<ViewState, ValidationError> {
        ViewState::new(
            self.center_x,
            self.center_y,
            self.zoom,
            self.width,
            self.height,
            self.max_iterations,
        )
    }
}

/// Zoom factors, debounce window and default view used by navigation.
///
/// Click zoom and wheel zoom are deliberately not reciprocal: a wheel notch
/// in then out does not return to the starting zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    pub click_zoom: f64,
    pub wheel_zoom_in: f64,
    pub wheel_zoom_out: f64,
    pub key_zoom_in: f64,
    pub key_zoom_out: f64,
    pub debounce_ms: u64,
    pub default_view: DefaultView,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            click_zoom: 1.5,
            wheel_zoom_in: 1.2,
            wheel_zoom_out: 0.8,
            key_zoom_in: 1.5,
            key_zoom_out: 0.67,
            debounce_ms: 10,
            default_view: DefaultView::default(),
        }
    }
}

impl NavigationSettings {
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_valid() {
        let view = NavigationSettings::default()
            .default_view
            .to_view_state()
            .unwrap();

        assert_eq!(view.center_x(), -0.5);
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.max_iterations(), 256);
    }

    #[test]
    fn test_nested_partial_json() {
        let settings: NavigationSettings = serde_json::from_str(
            r#"{ "debounce_ms": 25, "default_view": { "width": 320, "height": 200 } }"#,
        )
        .unwrap();

        assert_eq!(settings.debounce(), Duration::from_millis(25));
        assert_eq!(settings.default_view.width, 320);
        assert_eq!(settings.default_view.zoom, 1.0);
        assert_eq!(settings.click_zoom, 1.5);
    }
}
