//! UserRef domain model.

use serde::{Deserialize, Serialize};

/// Reference to the identity acting on a quick message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Stable user id assigned by the host
    pub id: String,
    /// Login name shown in listings
    pub username: String,
}

impl UserRef {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

impl Default for UserRef {
    fn default() -> Self {
        Self {
            id: "user".to_string(),
            username: "user".to_string(),
        }
    }
}

impl std::fmt::Display for UserRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.username)
    }
}
