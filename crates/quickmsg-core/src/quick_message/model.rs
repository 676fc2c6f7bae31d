//! QuickMessage record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::persistence::RecordId;
use crate::user::UserRef;

/// A stored quick message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickMessage {
    /// User-chosen id, unique within the workspace
    pub id: String,
    /// Reference to the copy kept under the global index.
    /// Only present on the per-id copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_record_id: Option<RecordId>,
    /// Message body
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: UserRef,
    pub updated_by: UserRef,
}

impl QuickMessage {
    /// Creates a fresh record stamped with the current time and `actor` as
    /// both creator and updater.
    pub fn new(id: impl Into<String>, text: impl Into<String>, actor: &UserRef) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            global_record_id: None,
            text: text.into(),
            created_at: now,
            updated_at: now,
            created_by: actor.clone(),
            updated_by: actor.clone(),
        }
    }

    /// Returns a copy carrying the new text, refreshed update stamps and the
    /// original id, creation stamps and global reference.
    pub fn revised(&self, text: impl Into<String>, actor: &UserRef) -> Self {
        Self {
            id: self.id.clone(),
            global_record_id: self.global_record_id.clone(),
            text: text.into(),
            created_at: self.created_at,
            updated_at: Utc::now(),
            created_by: self.created_by.clone(),
            updated_by: actor.clone(),
        }
    }
}
