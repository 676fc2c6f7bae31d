//! `/quick-message` command dispatcher.
//!
//! Stateless per invocation: parse the tokens, run the operation against the
//! storage manager, and turn the outcome into a [`DisplayResult`].

use chrono::{DateTime, Local, Utc};

use quickmsg_core::command::texts::{
    EMPTY_LIST, FAILURE_PREFIX, HELP, INVALID_USAGE, UNEXPECTED_FAILURE,
};
use quickmsg_core::command::{CommandContext, DisplayResult, Operation};
use quickmsg_core::config::DisplaySettings;
use quickmsg_core::error::{ErrorClass, QuickMessageError, Result};
use quickmsg_core::quick_message::QuickMessage;

use crate::message_storage_manager::MessageStorageManager;

pub struct CommandDispatcher {
    storage: MessageStorageManager,
    display: DisplaySettings,
}

impl CommandDispatcher {
    pub fn new(storage: MessageStorageManager, display: DisplaySettings) -> Self {
        Self { storage, display }
    }

    /// Runs one invocation. Never fails: every error becomes an error result.
    pub async fn execute<S: AsRef<str>>(
        &self,
        context: &CommandContext,
        tokens: &[S],
    ) -> DisplayResult {
        let operation = match Operation::parse(tokens) {
            Ok(operation) => operation,
            Err(e) => {
                tracing::debug!("Rejected /quick-message invocation: {}", e);
                return DisplayResult::error(INVALID_USAGE);
            }
        };

        tracing::debug!(
            "Running /quick-message {} for {} in {}",
            operation.name(),
            context.sender,
            context.room
        );

        match self.run(context, &operation).await {
            Ok(result) => result,
            Err(e) => self.render_error(&operation, e),
        }
    }

    async fn run(&self, context: &CommandContext, operation: &Operation) -> Result<DisplayResult> {
        match operation {
            Operation::Help => Ok(DisplayResult::info(HELP)),
            Operation::List => {
                let messages = self.storage.read_all().await?;
                Ok(DisplayResult::info(self.render_list(&messages)))
            }
            Operation::Send { id } => {
                let message = self.storage.read(id).await?;
                Ok(DisplayResult::message(message.text))
            }
            Operation::Create { id, text } => {
                self.storage.create(id, text, &context.sender).await?;
                Ok(DisplayResult::success(format!(
                    "Quick message **{}** created.",
                    id
                )))
            }
            Operation::Edit { id, text } => {
                self.storage.update(id, text, &context.sender).await?;
                Ok(DisplayResult::success(format!(
                    "Quick message **{}** updated.",
                    id
                )))
            }
            Operation::Remove { id } => {
                self.storage.remove(id).await?;
                Ok(DisplayResult::success(format!(
                    "Quick message **{}** removed.",
                    id
                )))
            }
        }
    }

    fn render_error(&self, operation: &Operation, error: QuickMessageError) -> DisplayResult {
        match error.class() {
            ErrorClass::Parsing => DisplayResult::error(INVALID_USAGE),
            ErrorClass::Storage => {
                tracing::warn!("/quick-message {} failed: {}", operation.name(), error);
                DisplayResult::error(format!("{}: {}", FAILURE_PREFIX, error))
            }
            ErrorClass::Unexpected => {
                tracing::error!(
                    "/quick-message {} failed unexpectedly: {:?}",
                    operation.name(),
                    error
                );
                DisplayResult::error(UNEXPECTED_FAILURE)
            }
        }
    }

    fn render_list(&self, messages: &[QuickMessage]) -> String {
        if messages.is_empty() {
            return EMPTY_LIST.to_string();
        }

        let lines: Vec<String> = messages
            .iter()
            .map(|message| {
                format!(
                    "**{}**: \"{}\" (by {} on {})",
                    message.id,
                    message.text,
                    message.created_by,
                    self.format_time(message.created_at)
                )
            })
            .collect();

        format!("Quick messages:\n{}", lines.join("\n"))
    }

    fn format_time(&self, time: DateTime<Utc>) -> String {
        time.with_timezone(&Local)
            .format(&self.display.time_format)
            .to_string()
    }
}
