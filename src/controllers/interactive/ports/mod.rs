//! Port definitions for the interactive controller.
//!
//! Traits describing how the coordinator hands results to whatever consumes
//! them (a channel, a window, a test recorder).

pub mod event_port;
