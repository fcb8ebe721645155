//! Where texture pages live on disk
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    constants::{DEFAULT_TEXTURE_DIR, DEFAULT_TEXTURE_EXTENSION, DEFAULT_TEXTURE_SUFFIX},
    error::ConfigError,
};

/// Texture page paths are `<texture_dir>/<page name><texture_suffix>.<texture_extension>`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AtlasConfig {
    pub texture_dir: PathBuf,
    pub texture_suffix: String,
    pub texture_extension: String,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            texture_dir: PathBuf::from(DEFAULT_TEXTURE_DIR),
            texture_suffix: DEFAULT_TEXTURE_SUFFIX.to_string(),
            texture_extension: DEFAULT_TEXTURE_EXTENSION.to_string(),
        }
    }
}

impl AtlasConfig {
    pub fn texture_path(&self, page_name: &str) -> PathBuf {
        let file_name = format!(
            "{}{}.{}",
            page_name, self.texture_suffix, self.texture_extension
        );

        self.texture_dir.join(file_name)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let buffer = std::fs::read_to_string(path).map_err(|op| ConfigError::IOError {
            source: op,
            path: path.to_path_buf(),
        })?;

        Self::from_toml_str(&buffer)
    }
}
