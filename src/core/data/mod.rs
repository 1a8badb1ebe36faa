pub mod colour;
pub mod complex;
pub mod compute_request;
pub mod fractal_params;
pub mod iteration_field;
pub mod pixel_buffer;
pub mod point;
pub mod stripe;
pub mod validation;
pub mod view_state;
