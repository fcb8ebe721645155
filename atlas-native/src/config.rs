//! Finds the texture path config
use std::{
    env,
    path::{Path, PathBuf},
};

use atlas::AtlasConfig;
use log::debug;

pub static CONFIG_FILE_NAME: &str = "config.toml";

fn default_config_path() -> PathBuf {
    match env::current_exe() {
        Ok(path) => match path.parent() {
            Some(parent) => parent.join(CONFIG_FILE_NAME),
            None => PathBuf::from(CONFIG_FILE_NAME),
        },
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Parses `explicit` if given, otherwise `config.toml` in the same folder as the binary.
///
/// A missing `config.toml` next to the binary means default paths. A missing explicit
/// config is an error.
pub fn parse_config(explicit: Option<&Path>) -> eyre::Result<AtlasConfig> {
    if let Some(path) = explicit {
        return Ok(AtlasConfig::from_file(path)?);
    }

    let path = default_config_path();

    if !path.exists() {
        debug!("no {}, using default texture paths", path.display());
        return Ok(AtlasConfig::default());
    }

    Ok(AtlasConfig::from_file(path)?)
}
