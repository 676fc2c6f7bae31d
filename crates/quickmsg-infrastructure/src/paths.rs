//! Path resolution for Quick Message files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/quick-message/        # Config directory
//! └── config.toml                 # Application configuration
//!
//! ~/.local/share/quick-message/   # Data directory
//! └── messages.json               # Stored quick messages
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "quick-message";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct QuickMessagePaths;

impl QuickMessagePaths {
    /// Returns the configuration directory (e.g. `~/.config/quick-message/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the data directory (e.g. `~/.local/share/quick-message/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Default location of the JSON message store.
    pub fn store_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("messages.json"))
    }
}
