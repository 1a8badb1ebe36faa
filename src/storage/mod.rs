pub mod preset_file;
pub mod settings_file;
