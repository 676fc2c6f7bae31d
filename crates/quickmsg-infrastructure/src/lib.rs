pub mod config_service;
pub mod file_store;
pub mod memory_store;
pub mod paths;
pub mod storage;

pub use crate::config_service::{ConfigService, open_store};
pub use crate::file_store::JsonFileStore;
pub use crate::memory_store::InMemoryStore;
pub use crate::paths::QuickMessagePaths;
