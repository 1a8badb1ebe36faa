//! Interactive exploration on top of the stripe pipeline.
//!
//! The [`ComputeCoordinator`] owns a worker thread and a rayon pool and
//! delivers [`ComputeEvent`]s of the latest generation to a
//! [`ComputeEventPort`]. The [`ExplorerSession`] drives it from a UI thread:
//! navigation, debouncing and the progressively refined display.

pub mod coordinator;
pub mod data;
pub mod display_buffer;
pub mod errors;
pub mod events;
pub mod ports;
pub mod session;

pub use coordinator::ComputeCoordinator;
pub use display_buffer::{DisplayBuffer, DisplayState};
pub use events::compute_event::{ComputeEvent, ComputeEventKind};
pub use ports::event_port::ComputeEventPort;
pub use session::ExplorerSession;
