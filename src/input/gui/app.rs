use std::time::Instant;

use log::{debug, error, warn};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopWindowTarget};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::controllers::interactive::display_buffer::DisplayState;
use crate::controllers::interactive::errors::session_error::SessionError;
use crate::controllers::interactive::session::ExplorerSession;
use crate::core::data::validation::ValidationError;
use crate::core::navigation::navigator::{KeyZoom, WheelDirection};
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Movement below this many pixels between press and release is a click.
const CLICK_SLOP: f64 = 3.0;

struct Drag {
    origin: PhysicalPosition<f64>,
    last: PhysicalPosition<f64>,
    moved: bool,
}

pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    session: ExplorerSession,
    cursor: PhysicalPosition<f64>,
    drag: Option<Drag>,
    shown_status: Option<(DisplayState, u8)>,
}

impl GuiApp {
    pub fn new(window: &'static Window, presenter: PixelsPresenter, session: ExplorerSession) -> Self {
        Self {
            window,
            presenter,
            session,
            cursor: PhysicalPosition::new(0.0, 0.0),
            drag: None,
            shown_status: None,
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent, target: &EventLoopWindowTarget<GuiEvent>) {
        let now = Instant::now();

        let navigation = match event {
            WindowEvent::CloseRequested => {
                target.exit();
                Ok(())
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = self.presenter.resize(size.width, size.height) {
                    error!("failed to resize framebuffer: {}", err);
                    target.exit();
                }
                if size.width == 0 || size.height == 0 {
                    Ok(())
                } else {
                    self.session.resize(size.width, size.height, now)
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = *position;
                self.drag_to(*position, now)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.left_button(*state, now),
            WindowEvent::MouseWheel { delta, .. } => {
                let notch = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y,
                };
                if notch > 0.0 {
                    self.session.wheel_zoom(WheelDirection::In, now)
                } else if notch < 0.0 {
                    self.session.wheel_zoom(WheelDirection::Out, now)
                } else {
                    Ok(())
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.key(event, target, now),
            WindowEvent::RedrawRequested => {
                self.redraw(target);
                Ok(())
            }
            _ => Ok(()),
        };

        // out-of-range views are refused and the current one kept
        if let Err(err) = navigation {
            warn!("ignoring navigation: {}", err);
        }
    }

    /// Submits settled navigation and applies queued compute events.
    pub fn pump(&mut self, target: &EventLoopWindowTarget<GuiEvent>) {
        match self.session.pump(Instant::now()) {
            Ok(true) => self.window.request_redraw(),
            Ok(false) => {}
            Err(err) => error!("could not submit view: {}", err),
        }

        match self.session.next_deadline() {
            Some(deadline) => target.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => target.set_control_flow(ControlFlow::Wait),
        }
    }

    /// Starts the first generation for the initial window size.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let (width, height) = self.presenter.size();
        if width > 0 && height > 0 {
            self.session.resize(width, height, Instant::now())?;
        }
        self.session.refresh()?;
        Ok(())
    }

    fn left_button(&mut self, state: ElementState, now: Instant) -> Result<(), ValidationError> {
        match state {
            ElementState::Pressed => {
                self.drag = Some(Drag {
                    origin: self.cursor,
                    last: self.cursor,
                    moved: false,
                });
                Ok(())
            }
            ElementState::Released => match self.drag.take() {
                Some(drag) if !drag.moved => self.session.zoom_to_point(self.cursor.x, self.cursor.y, now),
                _ => Ok(()),
            },
        }
    }

    fn drag_to(&mut self, position: PhysicalPosition<f64>, now: Instant) -> Result<(), ValidationError> {
        let Some(drag) = self.drag.as_mut() else {
            return Ok(());
        };

        if !drag.moved {
            let (dx, dy) = (position.x - drag.origin.x, position.y - drag.origin.y);
            if dx.hypot(dy) < CLICK_SLOP {
                return Ok(());
            }
            drag.moved = true;
        }

        let (dx, dy) = (position.x - drag.last.x, position.y - drag.last.y);
        drag.last = position;
        self.session.pan(dx, dy, now)
    }

    fn key(
        &mut self,
        event: &KeyEvent,
        target: &EventLoopWindowTarget<GuiEvent>,
        now: Instant,
    ) -> Result<(), ValidationError> {
        if event.state != ElementState::Pressed {
            return Ok(());
        }

        match &event.logical_key {
            Key::Named(NamedKey::Escape) => {
                target.exit();
                Ok(())
            }
            Key::Character(text) => match text.as_str() {
                "r" | "R" => self.session.reset(now),
                "+" | "=" => self.session.key_zoom(KeyZoom::In, now),
                "-" | "_" => self.session.key_zoom(KeyZoom::Out, now),
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }

    fn redraw(&mut self, target: &EventLoopWindowTarget<GuiEvent>) {
        let display = self.session.display();

        match display.render(self.session.palette()) {
            Ok(buffer) => self.presenter.draw(&buffer),
            Err(err) => warn!("could not colour the display: {}", err),
        }

        let status = (display.state().clone(), display.progress());
        if self.shown_status.as_ref() != Some(&status) {
            self.show_status(&status.0, status.1);
            self.shown_status = Some(status);
        }

        if let Err(err) = self.presenter.render() {
            error!("failed to present frame: {}", err);
            target.exit();
        }
    }

    fn show_status(&self, state: &DisplayState, progress: u8) {
        let view = self.session.view();
        let status = match state {
            DisplayState::Pending => "computing".to_owned(),
            DisplayState::Preview | DisplayState::Refining => format!("refining {}%", progress),
            DisplayState::Finished { elapsed } => format!("{} ms", elapsed.as_millis()),
            DisplayState::Failed { message } => format!("failed: {}", message),
        };

        debug!("display is {:?}", state);
        self.window.set_title(&format!(
            "Escape Explorer | {} | ({:.6}, {:.6}) x{:.3} | {}",
            self.session.fractal().kind(),
            view.center_x(),
            view.center_y(),
            view.zoom(),
            status
        ));
    }
}
