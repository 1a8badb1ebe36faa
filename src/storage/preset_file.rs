use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::presets::errors::PresetError;
use crate::core::presets::preset_record::PresetRecord;

#[derive(Deserialize)]
#[serde(untagged)]
enum PresetFile {
    Many(Vec<PresetRecord>),
    One(PresetRecord),
}

/// Reads a JSON file holding either one preset object or an array of them.
pub fn read_presets(path: impl AsRef<Path>) -> Result<Vec<PresetRecord>, PresetError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match serde_json::from_str(&text)? {
        PresetFile::Many(presets) => presets,
        PresetFile::One(preset) => vec![preset],
    })
}

pub fn write_presets(path: impl AsRef<Path>, presets: &[PresetRecord]) -> Result<(), PresetError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(presets)?;

    fs::write(path, json).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
