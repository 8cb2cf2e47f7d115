use crate::error::ConfigError;
use filter_syntax::ColumnDescriptor;
use serde::de::DeserializeOwned;
use std::{fs, path::Path};
use tracing::debug;

pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Loaded JSON file");
    Ok(serde_json::from_str(&contents)?)
}

/// Reads a JSON array of column descriptors.
pub fn load_columns(path: impl AsRef<Path>) -> Result<Vec<ColumnDescriptor>, ConfigError> {
    read_json_file(path)
}
