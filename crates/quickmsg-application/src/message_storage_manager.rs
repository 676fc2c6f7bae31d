//! Dual-indexed quick message storage.
//!
//! Every record is written twice: once under its own id and once under the
//! shared [`GLOBAL_INDEX_KEY`] used for listing. The substrate gives no
//! transaction across the two keys, so a failure between the writes leaves
//! the indexes out of step until [`MessageStorageManager::reconcile`] runs.

use std::sync::Arc;

use quickmsg_core::error::{QuickMessageError, Result};
use quickmsg_core::persistence::{Association, PersistenceStore, RecordId};
use quickmsg_core::quick_message::{GLOBAL_INDEX_KEY, QuickMessage, is_reserved_id, is_valid_id};
use quickmsg_core::user::UserRef;

/// Index entries that have lost their counterpart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Ids stored under their own key but missing from the global index
    pub missing_from_index: Vec<String>,
    /// Global index entries whose per-id copy is gone
    pub orphaned_index_entries: Vec<RecordId>,
    /// True when the orphans were deleted
    pub repaired: bool,
}

impl ReconcileReport {
    pub fn is_consistent(&self) -> bool {
        self.missing_from_index.is_empty() && self.orphaned_index_entries.is_empty()
    }
}

#[derive(Clone)]
pub struct MessageStorageManager {
    store: Arc<dyn PersistenceStore>,
}

impl MessageStorageManager {
    pub fn new(store: Arc<dyn PersistenceStore>) -> Self {
        Self { store }
    }

    pub async fn read(&self, id: &str) -> Result<QuickMessage> {
        self.find(id)
            .await?
            .ok_or_else(|| QuickMessageError::not_found(id))
    }

    /// Returns every record under the global index, oldest first.
    pub async fn read_all(&self) -> Result<Vec<QuickMessage>> {
        self.store
            .read_by_association(&Self::global_association())
            .await?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(QuickMessageError::from))
            .collect()
    }

    pub async fn create(&self, id: &str, text: &str, actor: &UserRef) -> Result<()> {
        if is_reserved_id(id) {
            return Err(QuickMessageError::reserved(id));
        }
        if !is_valid_id(id) {
            return Err(QuickMessageError::invalid_identifier(id));
        }
        if self.find(id).await?.is_some() {
            return Err(QuickMessageError::already_exists(id));
        }

        let mut message = QuickMessage::new(id, text, actor);

        let global_record_id = self
            .store
            .create_with_association(serde_json::to_value(&message)?, &Self::global_association())
            .await?;
        message.global_record_id = Some(global_record_id);

        // A failure here leaves an index entry without its per-id copy.
        self.store
            .create_with_association(serde_json::to_value(&message)?, &Self::message_association(id))
            .await?;

        tracing::debug!("Created quick message '{}' by {}", id, actor);
        Ok(())
    }

    /// Replaces the text of an existing record in both indexes.
    pub async fn update(&self, id: &str, text: &str, actor: &UserRef) -> Result<()> {
        let existing = self.read(id).await?;
        let revised = existing.revised(text, actor);

        self.store
            .update_by_association(&Self::message_association(id), serde_json::to_value(&revised)?)
            .await?;

        match &existing.global_record_id {
            Some(global_record_id) => {
                let mut indexed = revised;
                indexed.global_record_id = None;
                match self
                    .store
                    .update(global_record_id, serde_json::to_value(&indexed)?)
                    .await
                {
                    Ok(()) => {}
                    Err(e) if e.is_not_found() => {
                        tracing::warn!(
                            "Global index entry {} for '{}' is gone, updated the per-id copy only",
                            global_record_id,
                            id
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
            None => {
                tracing::warn!("Quick message '{}' has no global index reference", id);
            }
        }

        tracing::debug!("Updated quick message '{}' by {}", id, actor);
        Ok(())
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        let existing = self.read(id).await?;

        self.store
            .remove_by_association(&Self::message_association(id))
            .await?;

        match &existing.global_record_id {
            Some(global_record_id) => {
                if self.store.remove(global_record_id).await?.is_none() {
                    tracing::warn!(
                        "Global index entry {} for '{}' was already gone",
                        global_record_id,
                        id
                    );
                }
            }
            None => {
                tracing::warn!("Quick message '{}' has no global index reference", id);
            }
        }

        tracing::debug!("Removed quick message '{}'", id);
        Ok(())
    }

    /// Cross-checks both indexes. With `repair`, deletes global index entries
    /// that have no per-id copy. Per-id copies missing from the index are
    /// reported only.
    pub async fn reconcile(&self, repair: bool) -> Result<ReconcileReport> {
        let mut report = ReconcileReport::default();
        let global = Self::global_association();
        let entries = self.store.entries().await?;

        let mut per_id_keys: Vec<&Association> = Vec::new();
        for (association, _) in &entries {
            if association != &global && !per_id_keys.contains(&association) {
                per_id_keys.push(association);
            }
        }

        let mut referenced: Vec<RecordId> = Vec::new();
        for association in per_id_keys {
            for value in self.store.read_by_association(association).await? {
                let message: QuickMessage = serde_json::from_value(value)?;
                let indexed = message.global_record_id.filter(|global_record_id| {
                    entries
                        .iter()
                        .any(|(a, r)| a == &global && r == global_record_id)
                });
                match indexed {
                    Some(global_record_id) => referenced.push(global_record_id),
                    None => report.missing_from_index.push(message.id),
                }
            }
        }

        report.orphaned_index_entries = entries
            .iter()
            .filter(|(association, record_id)| {
                association == &global && !referenced.contains(record_id)
            })
            .map(|(_, record_id)| record_id.clone())
            .collect();

        if repair {
            for record_id in &report.orphaned_index_entries {
                tracing::info!("Removing orphaned global index entry {}", record_id);
                self.store.remove(record_id).await?;
            }
            report.repaired = true;
        }

        Ok(report)
    }

    async fn find(&self, id: &str) -> Result<Option<QuickMessage>> {
        let values = self
            .store
            .read_by_association(&Self::message_association(id))
            .await?;

        if values.len() > 1 {
            tracing::warn!(
                "Found {} records for quick message '{}', using the first",
                values.len(),
                id
            );
        }

        values
            .into_iter()
            .next()
            .map(serde_json::from_value)
            .transpose()
            .map_err(QuickMessageError::from)
    }

    fn message_association(id: &str) -> Association {
        Association::new(id)
    }

    fn global_association() -> Association {
        Association::new(GLOBAL_INDEX_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quickmsg_infrastructure::InMemoryStore;
    use serde_json::Value;

    fn manager() -> (MessageStorageManager, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (MessageStorageManager::new(store.clone()), store)
    }

    fn alice() -> UserRef {
        UserRef::new("u1", "alice")
    }

    #[tokio::test]
    async fn test_create_then_read() {
        let (manager, _) = manager();
        manager
            .create("good-morning", "Good morning!", &alice())
            .await
            .unwrap();

        let message = manager.read("good-morning").await.unwrap();
        assert_eq!(message.id, "good-morning");
        assert_eq!(message.text, "Good morning!");
        assert_eq!(message.created_by, alice());
        assert!(message.global_record_id.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_create_keeps_original() {
        let (manager, _) = manager();
        manager.create("hi", "first", &alice()).await.unwrap();

        let err = manager
            .create("hi", "second", &UserRef::new("u2", "bob"))
            .await
            .unwrap_err();

        assert!(err.is_already_exists());
        let message = manager.read("hi").await.unwrap();
        assert_eq!(message.text, "first");
        assert_eq!(manager.read_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reserved_id_is_rejected() {
        let (manager, store) = manager();
        for text in ["x", "anything at all"] {
            let err = manager
                .create(GLOBAL_INDEX_KEY, text, &alice())
                .await
                .unwrap_err();
            assert!(err.is_reserved());
        }
        assert!(store.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_id_is_rejected() {
        let (manager, _) = manager();
        let err = manager
            .create("good_morning", "hi", &alice())
            .await
            .unwrap_err();
        assert!(matches!(err, QuickMessageError::InvalidIdentifier { .. }));
    }

    #[tokio::test]
    async fn test_ids_are_case_sensitive() {
        let (manager, _) = manager();
        manager.create("Hi", "upper", &alice()).await.unwrap();
        manager.create("hi", "lower", &alice()).await.unwrap();

        assert_eq!(manager.read("Hi").await.unwrap().text, "upper");
        assert_eq!(manager.read("hi").await.unwrap().text, "lower");
    }

    #[tokio::test]
    async fn test_read_all_on_fresh_store_is_empty() {
        let (manager, _) = manager();
        assert!(manager.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_all_keeps_creation_order() {
        let (manager, _) = manager();
        for id in ["c", "a", "b"] {
            manager.create(id, id, &alice()).await.unwrap();
        }

        let ids: Vec<String> = manager
            .read_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_remove_clears_both_indexes() {
        let (manager, store) = manager();
        manager.create("hi", "Hello", &alice()).await.unwrap();
        manager.create("bye", "Goodbye", &alice()).await.unwrap();

        manager.remove("hi").await.unwrap();

        assert!(manager.read("hi").await.unwrap_err().is_not_found());
        let remaining: Vec<String> = manager
            .read_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(remaining, vec!["bye"]);
        assert_eq!(store.entries().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_remove_and_read_missing() {
        let (manager, _) = manager();
        assert!(manager.remove("nope").await.unwrap_err().is_not_found());
        assert!(manager.read("nope").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_refreshes_both_indexes() {
        let (manager, _) = manager();
        let bob = UserRef::new("u2", "bob");
        manager.create("hi", "Hello", &alice()).await.unwrap();
        let before = manager.read("hi").await.unwrap();

        manager.update("hi", "Hello again", &bob).await.unwrap();

        let direct = manager.read("hi").await.unwrap();
        assert_eq!(direct.text, "Hello again");
        assert_eq!(direct.created_by, alice());
        assert_eq!(direct.updated_by, bob);
        assert_eq!(direct.created_at, before.created_at);
        assert_eq!(direct.global_record_id, before.global_record_id);

        let listed = manager.read_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].text, "Hello again");

        // Removal still finds the index entry after an update.
        manager.remove("hi").await.unwrap();
        assert!(manager.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (manager, _) = manager();
        assert!(manager
            .update("nope", "text", &alice())
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_update_with_missing_index_entry_succeeds() {
        let (manager, store) = manager();
        manager.create("hi", "Hello", &alice()).await.unwrap();
        let global_record_id = manager.read("hi").await.unwrap().global_record_id.unwrap();
        store.remove(&global_record_id).await.unwrap();

        manager.update("hi", "Changed", &alice()).await.unwrap();

        assert_eq!(manager.read("hi").await.unwrap().text, "Changed");
        let report = manager.reconcile(false).await.unwrap();
        assert_eq!(report.missing_from_index, vec!["hi".to_string()]);
    }

    #[tokio::test]
    async fn test_reconcile_consistent_store() {
        let (manager, _) = manager();
        manager.create("hi", "Hello", &alice()).await.unwrap();
        manager.create("bye", "Goodbye", &alice()).await.unwrap();

        let report = manager.reconcile(false).await.unwrap();
        assert!(report.is_consistent());
    }

    /// Store whose per-id writes fail, leaving global index entries behind.
    struct FailingPerIdWrites {
        inner: InMemoryStore,
    }

    #[async_trait]
    impl PersistenceStore for FailingPerIdWrites {
        async fn create_with_association(
            &self,
            data: Value,
            association: &Association,
        ) -> Result<RecordId> {
            if association.key() == GLOBAL_INDEX_KEY {
                self.inner.create_with_association(data, association).await
            } else {
                Err(QuickMessageError::io("disk full"))
            }
        }

        async fn read_by_association(&self, association: &Association) -> Result<Vec<Value>> {
            self.inner.read_by_association(association).await
        }

        async fn update(&self, record_id: &RecordId, data: Value) -> Result<()> {
            self.inner.update(record_id, data).await
        }

        async fn update_by_association(
            &self,
            association: &Association,
            data: Value,
        ) -> Result<()> {
            self.inner.update_by_association(association, data).await
        }

        async fn remove(&self, record_id: &RecordId) -> Result<Option<Value>> {
            self.inner.remove(record_id).await
        }

        async fn remove_by_association(&self, association: &Association) -> Result<Vec<Value>> {
            self.inner.remove_by_association(association).await
        }

        async fn entries(&self) -> Result<Vec<(Association, RecordId)>> {
            self.inner.entries().await
        }
    }

    #[tokio::test]
    async fn test_half_written_create_is_found_and_repaired() {
        let store = Arc::new(FailingPerIdWrites {
            inner: InMemoryStore::new(),
        });
        let manager = MessageStorageManager::new(store.clone());

        let err = manager.create("hi", "Hello", &alice()).await.unwrap_err();
        assert!(matches!(err, QuickMessageError::Io { .. }));

        // Listed but not resolvable by id.
        assert_eq!(manager.read_all().await.unwrap().len(), 1);
        assert!(manager.read("hi").await.unwrap_err().is_not_found());

        let report = manager.reconcile(false).await.unwrap();
        assert_eq!(report.orphaned_index_entries.len(), 1);
        assert!(report.missing_from_index.is_empty());
        assert!(!report.repaired);

        let report = manager.reconcile(true).await.unwrap();
        assert!(report.repaired);
        assert!(manager.read_all().await.unwrap().is_empty());
        assert!(manager.reconcile(false).await.unwrap().is_consistent());
    }

    #[tokio::test]
    async fn test_reconcile_reports_copy_missing_from_index() {
        let (manager, store) = manager();
        manager.create("hi", "Hello", &alice()).await.unwrap();
        let global_record_id = manager.read("hi").await.unwrap().global_record_id.unwrap();
        store.remove(&global_record_id).await.unwrap();

        let report = manager.reconcile(true).await.unwrap();
        assert_eq!(report.missing_from_index, vec!["hi".to_string()]);
        assert!(report.orphaned_index_entries.is_empty());
    }
}
