pub mod compute_stripes;
