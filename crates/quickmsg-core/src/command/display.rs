//! Command outcome handed back to the host.

use serde::{Deserialize, Serialize};

/// Severity class of a reply, plus the room-message channel used by `send`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    Info,
    Success,
    Error,
    /// A real chat message for the whole room, not operational feedback
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResult {
    pub kind: DisplayKind,
    pub text: String,
}

impl DisplayResult {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: DisplayKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: DisplayKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: DisplayKind::Error,
            text: text.into(),
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self {
            kind: DisplayKind::Message,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == DisplayKind::Error
    }

    /// True when the result goes to the room rather than only to the sender.
    pub fn is_room_message(&self) -> bool {
        self.kind == DisplayKind::Message
    }
}
