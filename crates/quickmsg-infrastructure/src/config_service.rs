//! Configuration loading.
//!
//! Reads the root configuration from `config.toml`. A missing file means
//! defaults; a malformed one is an error.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use quickmsg_core::config::{RootConfig, StorageBackend, StorageSettings};
use quickmsg_core::error::{QuickMessageError, Result};
use quickmsg_core::persistence::PersistenceStore;

use crate::file_store::JsonFileStore;
use crate::memory_store::InMemoryStore;
use crate::paths::QuickMessagePaths;

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `config.toml` in the platform config directory.
    pub fn default_location() -> Result<Self> {
        let path = QuickMessagePaths::config_file()
            .map_err(|e| QuickMessageError::io(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "No config file at {}, using defaults",
                self.path.display()
            );
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            QuickMessageError::io(format!(
                "Failed to read config file at {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let config: RootConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Opens the persistence substrate the settings ask for.
pub fn open_store(settings: &StorageSettings) -> Result<Arc<dyn PersistenceStore>> {
    match settings.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; quick messages will not be kept");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::File => {
            let path = match &settings.path {
                Some(path) => path.clone(),
                None => QuickMessagePaths::store_file()
                    .map_err(|e| QuickMessageError::io(e.to_string()))?,
            };
            Ok(Arc::new(JsonFileStore::new(path)))
        }
    }
}
