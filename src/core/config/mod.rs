pub mod compute_settings;
pub mod errors;
pub mod explorer_settings;
pub mod navigation_settings;
