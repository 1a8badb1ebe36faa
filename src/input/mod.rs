//! Input adapters that translate user interaction into session calls.

#[cfg(feature = "gui")]
pub mod gui;
