use crossbeam_channel::Sender;

use crate::controllers::interactive::events::compute_event::ComputeEvent;

/// Receives events from the coordinator's worker thread.
pub trait ComputeEventPort: Send + Sync {
    fn present(&self, event: ComputeEvent);
}

impl ComputeEventPort for Sender<ComputeEvent> {
    fn present(&self, event: ComputeEvent) {
        // a dropped receiver means nobody is listening any more
        let _ = self.send(event);
    }
}

/// Forwards events to a channel, then calls `notify` so a sleeping consumer
/// (an event loop, typically) knows to drain it.
pub struct NotifyingSender<F> {
    sender: Sender<ComputeEvent>,
    notify: F,
}

impl<F: Fn() + Send + Sync> NotifyingSender<F> {
    pub fn new(sender: Sender<ComputeEvent>, notify: F) -> Self {
        Self { sender, notify }
    }
}

impl<F: Fn() + Send + Sync> ComputeEventPort for NotifyingSender<F> {
    fn present(&self, event: ComputeEvent) {
        if self.sender.send(event).is_ok() {
            (self.notify)();
        }
    }
}
