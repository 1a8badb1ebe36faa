//! Windowed front end: winit for input, pixels for the framebuffer.
//!
//! Input is translated into [`ExplorerSession`] navigation; compute events
//! wake the event loop through [`EventLoopWaker`] and are pumped into the
//! display buffer, which is recoloured and drawn on every redraw.
//!
//! [`ExplorerSession`]: crate::controllers::interactive::session::ExplorerSession
//! [`EventLoopWaker`]: crate::presenters::pixels::adapter::EventLoopWaker

pub mod app;
pub mod errors;
pub mod events;
pub mod run_gui;
