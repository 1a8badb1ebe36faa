use std::sync::{Mutex, PoisonError};

use winit::event_loop::EventLoopProxy;

use crate::input::gui::events::GuiEvent;

/// Wakes the winit event loop from the coordinator's worker thread.
pub struct EventLoopWaker {
    proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl EventLoopWaker {
    pub fn new(proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }

    pub fn wake(&self) {
        let proxy = self.proxy.lock().unwrap_or_else(PoisonError::into_inner);
        // fails only once the event loop has exited
        let _ = proxy.send_event(GuiEvent::Wake);
    }
}
