pub mod builtin_presets;
pub mod errors;
pub mod preset_record;
