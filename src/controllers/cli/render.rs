use std::path::Path;
use std::time::Duration;

use crossbeam_channel::Receiver;
use log::info;

use crate::controllers::cli::errors::RenderError;
use crate::controllers::interactive::coordinator::ComputeCoordinator;
use crate::controllers::interactive::display_buffer::{DisplayBuffer, DisplayState};
use crate::controllers::interactive::events::compute_event::{ComputeEvent, ComputeEventKind};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::config::compute_settings::ComputeSettings;
use crate::core::data::compute_request::ComputeRequest;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::palette::palette::Palette;

/// Renders single views to completion and hands the result to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    coordinator: ComputeCoordinator,
    events: Receiver<ComputeEvent>,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P, settings: ComputeSettings) -> Result<Self, RenderError> {
        let (coordinator, events) = ComputeCoordinator::with_channel(settings)?;

        Ok(Self {
            presenter,
            coordinator,
            events,
            buffer: None,
        })
    }

    /// Runs `request` through the coordinator, blocking until its generation
    /// ends, and colours the result. Returns the compute time.
    pub fn generate(&mut self, request: &ComputeRequest, palette: &Palette) -> Result<Duration, RenderError> {
        let generation = self.coordinator.submit(request)?;
        let mut display = DisplayBuffer::new(request.width, request.height);
        display.start_generation(generation, request.width, request.height);

        info!(
            "rendering {} at {}x{}, {} iterations",
            request.fractal_kind, request.width, request.height, request.max_iterations
        );

        loop {
            let event = self
                .events
                .recv()
                .map_err(|_| RenderError::Disconnected { generation })?;

            if let ComputeEventKind::Progress(percent) = event.kind {
                info!("progress {}%", percent);
            }
            display.apply(&event);

            match display.state() {
                DisplayState::Finished { elapsed } => {
                    let elapsed = *elapsed;
                    info!("generation {} finished in {:?}", generation, elapsed);

                    self.buffer = Some(display.render(palette)?);
                    return Ok(elapsed);
                }
                DisplayState::Failed { message } => {
                    return Err(RenderError::Failed {
                        generation,
                        message: message.clone(),
                    });
                }
                _ => {}
            }
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last rendered raster. Does nothing before the first render.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), P::Error> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use crate::core::palette::palette::INTERIOR_COLOUR;
    use std::convert::Infallible;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPresenter {
        written: Mutex<Vec<(PathBuf, PixelBuffer)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        type Error = Infallible;

        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), Self::Error> {
            self.written
                .lock()
                .unwrap()
                .push((filepath.to_path_buf(), buffer.clone()));
            Ok(())
        }
    }

    fn request(zoom: f64) -> ComputeRequest {
        ComputeRequest {
            fractal_kind: FractalKind::Mandelbrot,
            center_x: -0.5,
            center_y: 0.0,
            zoom,
            width: 21,
            height: 15,
            max_iterations: 50,
            c_real: None,
            c_imag: None,
        }
    }

    fn settings() -> ComputeSettings {
        ComputeSettings {
            stripe_height: 4,
            worker_threads: Some(2),
            ..ComputeSettings::default()
        }
    }

    #[test]
    fn test_generate_then_write_hands_buffer_to_presenter() {
        let presenter = RecordingPresenter::default();
        let mut controller = RenderController::new(&presenter, settings()).unwrap();

        controller.generate(&request(1.0), &Palette::default()).unwrap();
        controller.write("out.png").unwrap();

        let written = presenter.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("out.png"));
        assert_eq!((written[0].1.width(), written[0].1.height()), (21, 15));
    }

    #[test]
    fn test_centre_pixel_is_interior_colour() {
        let presenter = RecordingPresenter::default();
        let mut controller = RenderController::new(&presenter, settings()).unwrap();

        controller.generate(&request(1.0), &Palette::default()).unwrap();

        // (-0.5, 0) lies in the main cardioid
        let buffer = controller.buffer().unwrap();
        assert_eq!(buffer.pixel(10, 7), Ok(INTERIOR_COLOUR));
    }

    #[test]
    fn test_write_before_generate_does_nothing() {
        let presenter = RecordingPresenter::default();
        let controller = RenderController::new(&presenter, settings()).unwrap();

        controller.write("never.png").unwrap();

        assert!(presenter.written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_request_is_rejected() {
        let presenter = RecordingPresenter::default();
        let mut controller = RenderController::new(&presenter, settings()).unwrap();

        let result = controller.generate(&request(0.0), &Palette::default());

        assert!(matches!(result, Err(RenderError::Coordinator(_))));
        assert!(controller.buffer().is_none());
    }

    #[test]
    fn test_kernel_failure_is_reported() {
        let presenter = RecordingPresenter::default();
        let mut controller = RenderController::new(&presenter, settings()).unwrap();

        let result = controller.generate(&request(1e-320), &Palette::default());

        assert!(matches!(result, Err(RenderError::Failed { generation: 1, .. })));
    }

    #[test]
    fn test_custom_palette_colours_output() {
        let presenter = RecordingPresenter::default();
        let mut controller = RenderController::new(&presenter, settings()).unwrap();
        let palette = Palette::custom(&[Colour::new(0, 0, 0), Colour::new(255, 255, 255)]);

        controller.generate(&request(1.0), &palette).unwrap();

        // the top-left corner escapes, so it takes a palette entry
        let corner = controller.buffer().unwrap().pixel(0, 0).unwrap();
        assert!(palette.entries().contains(&corner));
    }
}
