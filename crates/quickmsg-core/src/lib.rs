//! Domain layer of the `/quick-message` chat command.

pub mod command;
pub mod config;
pub mod error;
pub mod persistence;
pub mod quick_message;
pub mod user;

// Re-export common error type
pub use error::QuickMessageError;
