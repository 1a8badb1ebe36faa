use std::fs;
use std::path::Path;

use log::debug;

use crate::core::config::errors::ConfigError;
use crate::core::config::explorer_settings::ExplorerSettings;

pub fn read_settings(path: impl AsRef<Path>) -> Result<ExplorerSettings, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = serde_json::from_str(&text)?;

    debug!("loaded settings from {}", path.display());
    Ok(settings)
}
