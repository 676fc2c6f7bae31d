//! Error types for the Quick Message command.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole Quick Message stack.
///
/// Parsing variants never leave the dispatcher. Storage variants carry a
/// message safe to show to the invoking user. Everything else is treated as
/// unexpected and only logged in full.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickMessageError {
    /// Missing or malformed arguments for a known operation
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// First token does not name an operation
    #[error("Unknown operation: '{0}'")]
    UnknownOperation(String),

    /// No record resolves for the id
    #[error("Message not found: '{id}'")]
    NotFound { id: String },

    /// A record with the id already exists
    #[error("A message with the id '{id}' already exists")]
    AlreadyExists { id: String },

    /// The id collides with the global index key
    #[error("The id '{id}' is reserved")]
    ReservedIdentifier { id: String },

    /// The id contains characters outside `[A-Za-z0-9-]`
    #[error("Invalid message id '{id}': only letters, digits and '-' are allowed")]
    InvalidIdentifier { id: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// File locking error
    #[error("Lock error: {0}")]
    Lock(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification used by the dispatcher to pick a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Rendered as the usage text
    Parsing,
    /// Rendered with the failure prefix and the error message
    Storage,
    /// Logged in full, rendered as a generic failure
    Unexpected,
}

impl QuickMessageError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    pub fn reserved(id: impl Into<String>) -> Self {
        Self::ReservedIdentifier { id: id.into() }
    }

    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        Self::InvalidIdentifier { id: id.into() }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidArguments(_) | Self::UnknownOperation(_) => ErrorClass::Parsing,
            Self::NotFound { .. }
            | Self::AlreadyExists { .. }
            | Self::ReservedIdentifier { .. }
            | Self::InvalidIdentifier { .. } => ErrorClass::Storage,
            Self::Io { .. } | Self::Serialization { .. } | Self::Lock(_) | Self::Internal(_) => {
                ErrorClass::Unexpected
            }
        }
    }

    pub fn is_parsing(&self) -> bool {
        self.class() == ErrorClass::Parsing
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::ReservedIdentifier { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for QuickMessageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for QuickMessageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for QuickMessageError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, QuickMessageError>`.
pub type Result<T> = std::result::Result<T, QuickMessageError>;
