//! Message emission surface provided by the host.

use async_trait::async_trait;

use super::DisplayResult;
use crate::error::Result;
use crate::user::UserRef;

/// Who invoked the command, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    pub sender: UserRef,
    pub room: String,
}

impl CommandContext {
    pub fn new(sender: UserRef, room: impl Into<String>) -> Self {
        Self {
            sender,
            room: room.into(),
        }
    }
}

/// Two output channels: private feedback and room messages.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Shows `result` to the invoking user only.
    async fn notify_user(&self, context: &CommandContext, result: &DisplayResult) -> Result<()>;

    /// Posts `text` into the room as the invoking user.
    async fn post_message(&self, context: &CommandContext, text: &str) -> Result<()>;
}

/// Routes `result` to the channel its kind calls for.
pub async fn deliver(
    sink: &dyn MessageSink,
    context: &CommandContext,
    result: &DisplayResult,
) -> Result<()> {
    if result.is_room_message() {
        sink.post_message(context, &result.text).await
    } else {
        sink.notify_user(context, result).await
    }
}
