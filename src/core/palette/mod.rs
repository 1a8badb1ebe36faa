pub mod colour_scheme_kinds;
pub mod errors;
pub mod palette;
pub mod schemes;
