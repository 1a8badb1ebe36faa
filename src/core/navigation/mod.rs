pub mod debounce;
pub mod navigator;
