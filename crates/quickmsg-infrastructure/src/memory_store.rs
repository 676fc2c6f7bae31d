//! In-memory persistence substrate.
//!
//! Contents live as long as the process. Used for tests and for the
//! `memory` storage backend.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use quickmsg_core::error::Result;
use quickmsg_core::persistence::{Association, PersistenceStore, RecordId};

use crate::storage::StoreDocument;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: RwLock<StoreDocument>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceStore for InMemoryStore {
    async fn create_with_association(
        &self,
        data: Value,
        association: &Association,
    ) -> Result<RecordId> {
        Ok(self.document.write().await.insert(association.clone(), data))
    }

    async fn read_by_association(&self, association: &Association) -> Result<Vec<Value>> {
        Ok(self.document.read().await.find(association))
    }

    async fn update(&self, record_id: &RecordId, data: Value) -> Result<()> {
        self.document.write().await.replace(record_id, data)
    }

    async fn update_by_association(&self, association: &Association, data: Value) -> Result<()> {
        self.document.write().await.replace_all(association, data)
    }

    async fn remove(&self, record_id: &RecordId) -> Result<Option<Value>> {
        Ok(self.document.write().await.take(record_id))
    }

    async fn remove_by_association(&self, association: &Association) -> Result<Vec<Value>> {
        Ok(self.document.write().await.take_all(association))
    }

    async fn entries(&self) -> Result<Vec<(Association, RecordId)>> {
        Ok(self.document.read().await.index())
    }
}
