pub mod cancellation;
pub mod compute_stripes;
pub mod generate_fractal;
pub mod generate_pixel_buffer;
