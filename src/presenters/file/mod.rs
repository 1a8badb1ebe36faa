pub mod errors;
pub mod image_file;
