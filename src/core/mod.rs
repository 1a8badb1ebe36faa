pub mod actions;
pub mod config;
pub mod data;
pub mod fractals;
pub mod navigation;
pub mod palette;
pub mod presets;
pub mod util;
