use std::path::PathBuf;

use thiserror::Error;

use crate::core::data::validation::ValidationError;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("no built-in preset named '{0}'")]
    UnknownPreset(String),
    #[error("preset '{name}' is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ValidationError,
    },
    #[error("failed to read or write presets at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed preset JSON: {0}")]
    Json(#[from] serde_json::Error),
}
