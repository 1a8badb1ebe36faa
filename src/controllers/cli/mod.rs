pub mod errors;
pub mod render;
