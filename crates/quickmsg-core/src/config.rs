//! Configuration models.
//!
//! Loaded from `config.toml`. Every section and field is optional; missing
//! values fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub storage: StorageSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

/// Which persistence substrate backs the storage manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Location of the JSON store. Defaults to the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Alias notifications are sent under
    pub sender_alias: String,
    pub emoji_avatar: String,
    /// `chrono` format string for timestamps in listings, rendered in local time
    pub time_format: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            sender_alias: "Quick Message".to_string(),
            emoji_avatar: ":speech_balloon:".to_string(),
            time_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
