//! User-level configuration (~/.config/autonpm/config.toml)
//!
//! Machine-specific settings that should NOT be committed to version control.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration loaded from ~/.config/autonpm/config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserConfig {
    /// npm binary path (machine-specific)
    pub npm_binary: Option<String>,
}

/// Get the user config directory path.
///
/// Returns `~/.config/autonpm/` on Unix and `%APPDATA%\autonpm\` on Windows.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("autonpm"))
}

/// Get the user config file path.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|p| p.join("config.toml"))
}

/// Load user configuration.
///
/// Returns `None` if the config file doesn't exist.
/// Returns an error if the file exists but is invalid TOML.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Ok(None),
    };

    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::Config(format!(
            "Failed to read user config at {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let config: UserConfig = toml::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse user config at {}: {}",
            config_path.display(),
            e
        ))
    })?;

    Ok(Some(config))
}
