//! Configuration loading
//!
//! Looks for an explicit `--config` path first, then
//! `<config_dir>/promptbar/config.toml`, and falls back to built-in defaults.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, FieldConfig, FieldKind, PageConfig, PanelConfig};

use crate::error::PromptbarError;

/// Default location of the config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("promptbar").join("config.toml"))
}

/// Load configuration, honoring an explicit path when given
///
/// An explicit path must exist. The default path is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, PromptbarError> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(PromptbarError::ConfigNotFound(path.to_path_buf()));
            }
            read_config(path)
        }
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Parse the config file at `path`
pub fn read_config(path: &Path) -> Result<Config, PromptbarError> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|e| PromptbarError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Render the configuration as TOML
pub fn to_toml(config: &Config) -> Result<String, PromptbarError> {
    toml::to_string_pretty(config).map_err(|e| PromptbarError::Io(e.to_string()))
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
