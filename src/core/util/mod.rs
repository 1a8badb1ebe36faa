pub mod calculate_stripes;
pub mod pixel_to_world;
