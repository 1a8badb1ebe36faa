use std::sync::Arc;

use log::info;
use winit::dpi::PhysicalSize;
use winit::event::Event;
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::session::ExplorerSession;
use crate::core::config::explorer_settings::ExplorerSettings;
use crate::core::data::fractal_params::Fractal;
use crate::core::palette::palette::Palette;
use crate::input::gui::app::GuiApp;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::EventLoopWaker;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the explorer window and runs until it is closed.
pub struct RunGuiCommand {
    settings: ExplorerSettings,
    fractal: Fractal,
    palette: Palette,
}

impl RunGuiCommand {
    pub fn new(settings: ExplorerSettings, fractal: Fractal, palette: Palette) -> Self {
        Self {
            settings,
            fractal,
            palette,
        }
    }

    pub fn execute(self) -> Result<(), GuiError> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let waker = Arc::new(EventLoopWaker::new(event_loop.create_proxy()));

        let default_view = self.settings.navigation.default_view;
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Escape Explorer")
                .with_inner_size(PhysicalSize::new(default_view.width, default_view.height))
                .with_min_inner_size(PhysicalSize::new(64, 64))
                .build(&event_loop)?,
        ));

        let mut session = ExplorerSession::with_notifier(
            self.settings.navigation,
            self.settings.compute,
            move || waker.wake(),
        )?;
        session.set_palette(self.palette);
        session.set_fractal(self.fractal, std::time::Instant::now());

        let presenter = PixelsPresenter::new(window)?;
        let mut app = GuiApp::new(window, presenter, session);
        app.start()?;

        info!("click to zoom in, drag to pan, scroll to zoom, R resets, +/- zoom about the centre");

        event_loop.run(move |event, target| match event {
            Event::WindowEvent { event, .. } => {
                app.handle_window_event(&event, target);
                app.pump(target);
            }
            Event::UserEvent(GuiEvent::Wake) | Event::AboutToWait => app.pump(target),
            _ => {}
        })?;

        Ok(())
    }
}
