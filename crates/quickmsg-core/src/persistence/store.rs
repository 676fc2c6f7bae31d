//! Persistence substrate trait.

use async_trait::async_trait;
use serde_json::Value;

use super::{Association, RecordId};
use crate::error::Result;

/// Key-value substrate the storage manager writes through.
///
/// Every single call is atomic. Nothing spans two calls.
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Stores `data` under `association` and returns a reference to the new entry.
    async fn create_with_association(
        &self,
        data: Value,
        association: &Association,
    ) -> Result<RecordId>;

    /// Returns every entry stored under `association`, oldest first.
    async fn read_by_association(&self, association: &Association) -> Result<Vec<Value>>;

    /// Overwrites the entry addressed by `record_id`.
    ///
    /// Fails with `NotFound` when the reference is unknown.
    async fn update(&self, record_id: &RecordId, data: Value) -> Result<()>;

    /// Overwrites every entry stored under `association`.
    ///
    /// Fails with `NotFound` when nothing is stored under the key.
    async fn update_by_association(&self, association: &Association, data: Value) -> Result<()>;

    /// Deletes the entry addressed by `record_id`, returning it if it existed.
    async fn remove(&self, record_id: &RecordId) -> Result<Option<Value>>;

    /// Deletes every entry stored under `association`, returning them.
    async fn remove_by_association(&self, association: &Association) -> Result<Vec<Value>>;

    /// Lists every stored entry as `(association, reference)`, oldest first.
    async fn entries(&self) -> Result<Vec<(Association, RecordId)>>;
}
