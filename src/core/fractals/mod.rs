pub mod escape_time;
pub mod escape_time_algorithm;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
