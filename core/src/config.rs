//! Loading and saving [`PrefsConfig`] as TOML
//!
//! A missing file is not an error: clients fall back to the built-in
//! endpoint and option catalog.

use std::fs;
use std::path::{Path, PathBuf};

use prefs_types::PrefsConfig;

use crate::error::ConfigError;

/// `<config_dir>/locale-prefs/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("locale-prefs").join("config.toml"))
}

/// Load a config file, returning defaults when it does not exist
pub fn load_config(path: &Path) -> Result<PrefsConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(PrefsConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: PrefsConfig = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    // A dropdown with nothing to pick can never pass validation
    if let Some(field) = config.options.first_empty() {
        return Err(ConfigError::EmptyOptionList {
            path: path.to_path_buf(),
            field,
        });
    }

    Ok(config)
}

/// Write a config file, creating parent directories as needed
pub fn save_config(path: &Path, config: &PrefsConfig) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
