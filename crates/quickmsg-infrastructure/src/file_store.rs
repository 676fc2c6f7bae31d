//! JSON file persistence substrate.
//!
//! The whole store is one JSON document. Each trait call is a single locked
//! read-modify-write, so a call is atomic but two calls are not.
//!
//! File location: `{data_dir}/quick-message/messages.json` unless configured.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use quickmsg_core::error::{QuickMessageError, Result};
use quickmsg_core::persistence::{Association, PersistenceStore, RecordId};

use crate::storage::{AtomicJsonFile, StoreDocument};

pub struct JsonFileStore {
    file: AtomicJsonFile<StoreDocument>,
    /// Serializes calls from this process; the file lock covers other processes.
    guard: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        tracing::debug!("Opening quick message store at {}", path.display());
        Self {
            file: AtomicJsonFile::new(path),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn read<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&StoreDocument) -> R + Send + 'static,
        R: Send + 'static,
    {
        let _guard = self.guard.lock().await;
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || -> Result<R> {
            let document = file.load()?.unwrap_or_default();
            Ok(f(&document))
        })
        .await
        .map_err(|e| QuickMessageError::internal(format!("Store task failed: {}", e)))?
    }

    async fn mutate<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut StoreDocument) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let _guard = self.guard.lock().await;
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || file.update(StoreDocument::default(), f))
            .await
            .map_err(|e| QuickMessageError::internal(format!("Store task failed: {}", e)))?
    }
}

#[async_trait]
impl PersistenceStore for JsonFileStore {
    async fn create_with_association(
        &self,
        data: Value,
        association: &Association,
    ) -> Result<RecordId> {
        let association = association.clone();
        self.mutate(move |doc| Ok(doc.insert(association, data))).await
    }

    async fn read_by_association(&self, association: &Association) -> Result<Vec<Value>> {
        let association = association.clone();
        self.read(move |doc| doc.find(&association)).await
    }

    async fn update(&self, record_id: &RecordId, data: Value) -> Result<()> {
        let record_id = record_id.clone();
        self.mutate(move |doc| doc.replace(&record_id, data)).await
    }

    async fn update_by_association(&self, association: &Association, data: Value) -> Result<()> {
        let association = association.clone();
        self.mutate(move |doc| doc.replace_all(&association, data))
            .await
    }

    async fn remove(&self, record_id: &RecordId) -> Result<Option<Value>> {
        let record_id = record_id.clone();
        self.mutate(move |doc| Ok(doc.take(&record_id))).await
    }

    async fn remove_by_association(&self, association: &Association) -> Result<Vec<Value>> {
        let association = association.clone();
        self.mutate(move |doc| Ok(doc.take_all(&association))).await
    }

    async fn entries(&self) -> Result<Vec<(Association, RecordId)>> {
        self.read(|doc| doc.index()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_store_reads_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("messages.json"));

        assert!(store
            .read_by_association(&Association::new("any"))
            .await
            .unwrap()
            .is_empty());
        assert!(store.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("messages.json");
        let key = Association::new("greeting");

        let record_id = {
            let store = JsonFileStore::new(path.clone());
            store
                .create_with_association(json!({"text": "hi"}), &key)
                .await
                .unwrap()
        };

        let reopened = JsonFileStore::new(path);
        assert_eq!(
            reopened.read_by_association(&key).await.unwrap(),
            vec![json!({"text": "hi"})]
        );
        assert_eq!(reopened.entries().await.unwrap(), vec![(key, record_id)]);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("messages.json"));
        let key = Association::new("greeting");
        store.create_with_association(json!(1), &key).await.unwrap();

        let err = store
            .update(&RecordId::from("missing"), json!(2))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.read_by_association(&key).await.unwrap(), vec![json!(1)]);
    }

    #[tokio::test]
    async fn test_remove_by_association() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("messages.json"));
        let key = Association::new("greeting");
        store.create_with_association(json!(1), &key).await.unwrap();
        store
            .create_with_association(json!(2), &Association::new("other"))
            .await
            .unwrap();

        assert_eq!(store.remove_by_association(&key).await.unwrap(), vec![json!(1)]);
        assert_eq!(store.entries().await.unwrap().len(), 1);
    }
}
