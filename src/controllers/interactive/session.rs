use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::Receiver;
use log::debug;

use crate::controllers::interactive::coordinator::ComputeCoordinator;
use crate::controllers::interactive::display_buffer::DisplayBuffer;
use crate::controllers::interactive::errors::session_error::SessionError;
use crate::controllers::interactive::events::compute_event::ComputeEvent;
use crate::controllers::interactive::ports::event_port::NotifyingSender;
use crate::core::config::compute_settings::ComputeSettings;
use crate::core::config::navigation_settings::NavigationSettings;
use crate::core::data::compute_request::ComputeRequest;
use crate::core::data::fractal_params::{Fractal, FractalParams};
use crate::core::data::validation::ValidationError;
use crate::core::data::view_state::ViewState;
use crate::core::navigation::debounce::Debouncer;
use crate::core::navigation::navigator::{KeyZoom, Navigator, WheelDirection};
use crate::core::palette::palette::Palette;
use crate::core::presets::preset_record::PresetRecord;

/// Control-thread state of an exploration: the view, the selected fractal,
/// pending submissions and the raster being refined.
///
/// Navigation calls only schedule work. [`ExplorerSession::pump`] submits
/// the settled request and folds delivered events into the display.
pub struct ExplorerSession {
    navigator: Navigator,
    fractal: Fractal,
    palette: Palette,
    debouncer: Debouncer<ComputeRequest>,
    coordinator: ComputeCoordinator,
    events: Receiver<ComputeEvent>,
    display: DisplayBuffer,
}

impl ExplorerSession {
    pub fn new(
        navigation: NavigationSettings,
        compute: ComputeSettings,
    ) -> Result<Self, SessionError> {
        Self::with_notifier(navigation, compute, || {})
    }

    /// Like [`ExplorerSession::new`], calling `notify` from the worker thread
    /// whenever an event is queued for [`ExplorerSession::pump`].
    pub fn with_notifier<F>(
        navigation: NavigationSettings,
        compute: ComputeSettings,
        notify: F,
    ) -> Result<Self, SessionError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let navigator = Navigator::new(navigation)?;
        let (sender, events) = crossbeam_channel::unbounded();
        let coordinator = ComputeCoordinator::new(compute, Arc::new(NotifyingSender::new(sender, notify)))?;
        let view = navigator.view();

        Ok(Self {
            debouncer: Debouncer::new(navigation.debounce()),
            display: DisplayBuffer::new(view.canvas_width(), view.canvas_height()),
            navigator,
            fractal: Fractal::Mandelbrot,
            palette: Palette::default(),
            coordinator,
            events,
        })
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.navigator.view()
    }

    #[must_use]
    pub fn fractal(&self) -> Fractal {
        self.fractal
    }

    #[must_use]
    pub fn display(&self) -> &DisplayBuffer {
        &self.display
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn coordinator(&self) -> &ComputeCoordinator {
        &self.coordinator
    }

    /// Recolouring needs no recomputation.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    #[must_use]
    pub fn current_request(&self) -> ComputeRequest {
        ComputeRequest::from(FractalParams::new(self.fractal, self.navigator.view()))
    }

    pub fn zoom_to_point(&mut self, px: f64, py: f64, now: Instant) -> Result<(), ValidationError> {
        self.navigator.zoom_to_point(px, py)?;
        self.schedule(now);
        Ok(())
    }

    pub fn pan(&mut self, dx: f64, dy: f64, now: Instant) -> Result<(), ValidationError> {
        self.navigator.pan(dx, dy)?;
        self.schedule(now);
        Ok(())
    }

    pub fn wheel_zoom(&mut self, direction: WheelDirection, now: Instant) -> Result<(), ValidationError> {
        self.navigator.wheel_zoom(direction)?;
        self.schedule(now);
        Ok(())
    }

    pub fn key_zoom(&mut self, direction: KeyZoom, now: Instant) -> Result<(), ValidationError> {
        self.navigator.key_zoom(direction)?;
        self.schedule(now);
        Ok(())
    }

    pub fn reset(&mut self, now: Instant) -> Result<(), ValidationError> {
        self.navigator.reset()?;
        self.schedule(now);
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32, now: Instant) -> Result<(), ValidationError> {
        self.navigator.resize(width, height)?;
        self.schedule(now);
        Ok(())
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32, now: Instant) -> Result<(), ValidationError> {
        self.navigator.set_max_iterations(max_iterations)?;
        self.schedule(now);
        Ok(())
    }

    pub fn set_fractal(&mut self, fractal: Fractal, now: Instant) {
        self.fractal = fractal;
        self.schedule(now);
    }

    /// Applies a preset at the current canvas size.
    pub fn load_preset(&mut self, preset: &PresetRecord, now: Instant) -> Result<(), SessionError> {
        let view = self.navigator.view();
        let params = preset.to_params(view.canvas_width(), view.canvas_height())?;

        self.fractal = params.fractal;
        self.navigator.set_view(params.view);
        self.schedule(now);
        Ok(())
    }

    /// Submits the current request right away, bypassing the debounce window.
    pub fn refresh(&mut self) -> Result<u64, SessionError> {
        self.debouncer.flush();
        let request = self.current_request();
        self.submit(&request)
    }

    /// Submits a request whose quiet window has passed, then applies every
    /// delivered event. Returns whether the display changed.
    pub fn pump(&mut self, now: Instant) -> Result<bool, SessionError> {
        if let Some(request) = self.debouncer.poll(now) {
            self.submit(&request)?;
        }

        let mut changed = false;
        while let Ok(event) = self.events.try_recv() {
            changed |= self.display.apply(&event);
        }

        Ok(changed)
    }

    /// When the next pending submission becomes due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    fn schedule(&mut self, now: Instant) {
        let request = self.current_request();
        self.debouncer.push(request, now);
    }

    fn submit(&mut self, request: &ComputeRequest) -> Result<u64, SessionError> {
        let generation = self.coordinator.submit(request)?;
        self.display.start_generation(generation, request.width, request.height);

        debug!("session now displays generation {}", generation);
        Ok(generation)
    }
}
