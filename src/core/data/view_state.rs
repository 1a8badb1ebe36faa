use crate::core::data::complex::Complex;
use crate::core::data::validation::ValidationError;

/// Rectangle of the complex plane covered by a view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Center/zoom description of what a canvas shows.
///
/// At zoom 1 the canvas spans 2.0 world units horizontally; the vertical extent
/// follows the canvas aspect ratio so pixels stay square in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    center_x: f64,
    center_y: f64,
    zoom: f64,
    canvas_width: u32,
    canvas_height: u32,
    max_iterations: u32,
}

impl ViewState {
    pub fn new(
        center_x: f64,
        center_y: f64,
        zoom: f64,
        canvas_width: u32,
        canvas_height: u32,
        max_iterations: u32,
    ) -> Result<Self, ValidationError> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ValidationError::NonFiniteCenter { center_x, center_y });
        }

        // `!(zoom > 0.0)` also rejects NaN
        if !(zoom > 0.0) || !zoom.is_finite() {
            return Err(ValidationError::InvalidZoom(zoom));
        }

        if canvas_width == 0 || canvas_height == 0 {
            return Err(ValidationError::InvalidCanvasSize {
                width: canvas_width,
                height: canvas_height,
            });
        }

        if max_iterations == 0 {
            return Err(ValidationError::ZeroMaxIterations);
        }

        Ok(Self {
            center_x,
            center_y,
            zoom,
            canvas_width,
            canvas_height,
            max_iterations,
        })
    }

    /// Builds the view whose canvas covers `bounds` as tightly as possible
    /// without distorting it.
    pub fn from_bounds(
        bounds: WorldBounds,
        canvas_width: u32,
        canvas_height: u32,
        max_iterations: u32,
    ) -> Result<Self, ValidationError> {
        let range_x = bounds.x_max - bounds.x_min;
        let range_y = bounds.y_max - bounds.y_min;

        if !(range_x > 0.0) || !(range_y > 0.0) {
            return Err(ValidationError::EmptyBounds {
                x_min: bounds.x_min,
                x_max: bounds.x_max,
                y_min: bounds.y_min,
                y_max: bounds.y_max,
            });
        }

        if canvas_width == 0 || canvas_height == 0 {
            return Err(ValidationError::InvalidCanvasSize {
                width: canvas_width,
                height: canvas_height,
            });
        }

        let zoom_x = 2.0 / range_x;
        let zoom_y = 2.0 / range_y * (f64::from(canvas_height) / f64::from(canvas_width));

        Self::new(
            (bounds.x_min + bounds.x_max) / 2.0,
            (bounds.y_min + bounds.y_max) / 2.0,
            zoom_x.min(zoom_y),
            canvas_width,
            canvas_height,
            max_iterations,
        )
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center_x, self.center_y)
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    #[must_use]
    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.canvas_width as usize * self.canvas_height as usize
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        2.0 / self.zoom
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.canvas_width) / f64::from(self.canvas_height)
    }

    #[must_use]
    pub fn world_width(&self) -> f64 {
        self.scale()
    }

    #[must_use]
    pub fn world_height(&self) -> f64 {
        self.scale() / self.aspect()
    }

    /// World units covered by one pixel, identical on both axes.
    #[must_use]
    pub fn pixel_size(&self) -> f64 {
        self.world_width() / f64::from(self.canvas_width)
    }

    #[must_use]
    pub fn bounds(&self) -> WorldBounds {
        let half_width = self.world_width() / 2.0;
        let half_height = self.world_height() / 2.0;

        WorldBounds {
            x_min: self.center_x - half_width,
            x_max: self.center_x + half_width,
            y_min: self.center_y - half_height,
            y_max: self.center_y + half_height,
        }
    }

    pub fn with_center(self, center: Complex) -> Result<Self, ValidationError> {
        Self::new(
            center.real,
            center.imag,
            self.zoom,
            self.canvas_width,
            self.canvas_height,
            self.max_iterations,
        )
    }

    pub fn with_zoom(self, zoom: f64) -> Result<Self, ValidationError> {
        Self::new(
            self.center_x,
            self.center_y,
            zoom,
            self.canvas_width,
            self.canvas_height,
            self.max_iterations,
        )
    }

    pub fn with_canvas_size(self, width: u32, height: u32) -> Result<Self, ValidationError> {
        Self::new(
            self.center_x,
            self.center_y,
            self.zoom,
            width,
            height,
            self.max_iterations,
        )
    }

    pub fn with_max_iterations(self, max_iterations: u32) -> Result<Self, ValidationError> {
        Self::new(
            self.center_x,
            self.center_y,
            self.zoom,
            self.canvas_width,
            self.canvas_height,
            max_iterations,
        )
    }

    /// Same world window on a canvas reduced by `factor` on each axis,
    /// never smaller than 1x1.
    #[must_use]
    pub fn scaled_down(self, factor: u32) -> Self {
        let factor = factor.max(1);

        Self {
            canvas_width: (self.canvas_width / factor).max(1),
            canvas_height: (self.canvas_height / factor).max(1),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(width: u32, height: u32, zoom: f64) -> ViewState {
        ViewState::new(-0.5, 0.0, zoom, width, height, 100).unwrap()
    }

    #[test]
    fn test_new_rejects_non_positive_zoom() {
        assert_eq!(
            ViewState::new(0.0, 0.0, 0.0, 10, 10, 10),
            Err(ValidationError::InvalidZoom(0.0))
        );
        assert_eq!(
            ViewState::new(0.0, 0.0, -1.0, 10, 10, 10),
            Err(ValidationError::InvalidZoom(-1.0))
        );
        assert!(matches!(
            ViewState::new(0.0, 0.0, f64::NAN, 10, 10, 10),
            Err(ValidationError::InvalidZoom(_))
        ));
    }

    #[test]
    fn test_new_rejects_zero_canvas_dimensions() {
        assert_eq!(
            ViewState::new(0.0, 0.0, 1.0, 0, 10, 10),
            Err(ValidationError::InvalidCanvasSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            ViewState::new(0.0, 0.0, 1.0, 10, 0, 10),
            Err(ValidationError::InvalidCanvasSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_new_rejects_zero_max_iterations() {
        assert_eq!(
            ViewState::new(0.0, 0.0, 1.0, 10, 10, 0),
            Err(ValidationError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_new_rejects_non_finite_center() {
        assert!(matches!(
            ViewState::new(f64::INFINITY, 0.0, 1.0, 10, 10, 10),
            Err(ValidationError::NonFiniteCenter { .. })
        ));
    }

    #[test]
    fn test_world_extents_at_zoom_one() {
        let v = view(800, 400, 1.0);

        assert_eq!(v.world_width(), 2.0);
        assert_eq!(v.world_height(), 1.0);
    }

    #[test]
    fn test_world_per_pixel_is_equal_on_both_axes() {
        for &(width, height) in &[(1, 1), (100, 100), (800, 600), (7, 1013), (1920, 1080)] {
            for &zoom in &[1e-3, 0.5, 1.0, 1.5, 37.25, 1e9] {
                let v = view(width, height, zoom);
                let per_x = v.world_width() / f64::from(width);
                let per_y = v.world_height() / f64::from(height);

                assert!(
                    ((per_x - per_y) / per_x).abs() < 1e-12,
                    "distorted pixels for {}x{} at zoom {}: {} vs {}",
                    width,
                    height,
                    zoom,
                    per_x,
                    per_y
                );
            }
        }
    }

    #[test]
    fn test_bounds_are_centered() {
        let v = view(200, 100, 2.0);
        let bounds = v.bounds();

        assert_eq!(bounds.x_min, -1.0);
        assert_eq!(bounds.x_max, 0.0);
        assert_eq!(bounds.y_min, -0.25);
        assert_eq!(bounds.y_max, 0.25);
    }

    #[test]
    fn test_from_bounds_round_trips_view() {
        let original = view(800, 600, 3.0);
        let rebuilt = ViewState::from_bounds(original.bounds(), 800, 600, 100).unwrap();

        assert!((rebuilt.zoom() - original.zoom()).abs() < 1e-12);
        assert!((rebuilt.center_x() - original.center_x()).abs() < 1e-12);
        assert!(rebuilt.center_y().abs() < 1e-12);
    }

    #[test]
    fn test_from_bounds_fits_the_tighter_axis() {
        // 2.0 wide but 2.5 tall on a 4:3 canvas: height limits the zoom
        let bounds = WorldBounds {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.25,
            y_max: 1.25,
        };
        let v = ViewState::from_bounds(bounds, 800, 600, 256).unwrap();

        assert!((v.zoom() - 0.6).abs() < 1e-12);
        assert_eq!(v.center(), Complex::ZERO);
    }

    #[test]
    fn test_from_bounds_rejects_empty_rect() {
        let bounds = WorldBounds {
            x_min: 1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        };

        assert!(matches!(
            ViewState::from_bounds(bounds, 10, 10, 10),
            Err(ValidationError::EmptyBounds { .. })
        ));
    }

    #[test]
    fn test_scaled_down_keeps_world_window() {
        let v = view(800, 600, 2.0);
        let preview = v.scaled_down(4);

        assert_eq!(preview.canvas_width(), 200);
        assert_eq!(preview.canvas_height(), 150);
        assert_eq!(preview.center(), v.center());
        assert_eq!(preview.world_width(), v.world_width());
    }

    #[test]
    fn test_scaled_down_never_produces_empty_canvas() {
        let preview = view(3, 2, 1.0).scaled_down(4);

        assert_eq!(preview.canvas_width(), 1);
        assert_eq!(preview.canvas_height(), 1);
    }
}
