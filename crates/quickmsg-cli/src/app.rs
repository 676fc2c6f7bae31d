//! Wiring of config, storage, dispatcher and terminal output.

use std::path::Path;

use anyhow::{Context, Result};

use quickmsg_application::{CommandDispatcher, MessageStorageManager};
use quickmsg_core::command::CommandContext;
use quickmsg_core::config::RootConfig;
use quickmsg_core::user::UserRef;
use quickmsg_infrastructure::{ConfigService, open_store};

use crate::terminal_sink::TerminalSink;

pub struct App {
    pub dispatcher: CommandDispatcher,
    pub storage: MessageStorageManager,
    pub sink: TerminalSink,
    pub context: CommandContext,
}

pub fn load_config(path: Option<&Path>) -> Result<RootConfig> {
    let service = match path {
        Some(path) => ConfigService::new(path.to_path_buf()),
        None => ConfigService::default_location()?,
    };

    service
        .load()
        .with_context(|| format!("Failed to load config from {}", service.path().display()))
}

impl App {
    pub fn bootstrap(config: RootConfig, user: Option<String>, room: String) -> Result<Self> {
        let store = open_store(&config.storage).context("Failed to open message store")?;
        let storage = MessageStorageManager::new(store);
        let dispatcher = CommandDispatcher::new(storage.clone(), config.display.clone());

        let username = user
            .or_else(|| std::env::var("USER").ok())
            .unwrap_or_else(|| UserRef::default().username);
        let context = CommandContext::new(UserRef::new(username.clone(), username), room);

        tracing::debug!(
            "Bootstrapped quick-message for {} in {}",
            context.sender,
            context.room
        );

        Ok(Self {
            dispatcher,
            storage,
            sink: TerminalSink::new(config.display),
            context,
        })
    }

    /// Runs one invocation and prints its outcome.
    pub async fn invoke(&self, tokens: &[&str]) -> Result<()> {
        let result = self.dispatcher.execute(&self.context, tokens).await;
        quickmsg_core::command::deliver(&self.sink, &self.context, &result).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickmsg_core::config::StorageBackend;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_from_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nbackend = \"memory\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[tokio::test]
    async fn test_bootstrap_uses_given_user_and_room() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = RootConfig::default();
        config.storage.path = Some(temp_dir.path().join("messages.json"));

        let app = App::bootstrap(config, Some("carol".to_string()), "ops".to_string()).unwrap();
        assert_eq!(app.context.sender.username, "carol");
        assert_eq!(app.context.room, "ops");

        app.invoke(&["create", "hi", "\"Hello\""]).await.unwrap();
        assert_eq!(app.storage.read("hi").await.unwrap().created_by.username, "carol");
    }
}
