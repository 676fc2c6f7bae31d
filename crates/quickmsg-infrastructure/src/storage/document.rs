//! In-memory shape of a persistence substrate.
//!
//! Entries stay in insertion order so reads by association come back oldest
//! first.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use quickmsg_core::error::{QuickMessageError, Result};
use quickmsg_core::persistence::{Association, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEntry {
    pub record_id: RecordId,
    pub association: Association,
    pub data: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub entries: Vec<StoredEntry>,
}

impl StoreDocument {
    pub fn insert(&mut self, association: Association, data: Value) -> RecordId {
        let record_id = RecordId::generate();
        self.entries.push(StoredEntry {
            record_id: record_id.clone(),
            association,
            data,
        });
        record_id
    }

    pub fn find(&self, association: &Association) -> Vec<Value> {
        self.entries
            .iter()
            .filter(|entry| &entry.association == association)
            .map(|entry| entry.data.clone())
            .collect()
    }

    pub fn replace(&mut self, record_id: &RecordId, data: Value) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| &entry.record_id == record_id)
            .ok_or_else(|| QuickMessageError::not_found(record_id.as_str()))?;
        entry.data = data;
        Ok(())
    }

    pub fn replace_all(&mut self, association: &Association, data: Value) -> Result<()> {
        let mut matched = false;
        for entry in self
            .entries
            .iter_mut()
            .filter(|entry| &entry.association == association)
        {
            entry.data = data.clone();
            matched = true;
        }

        if matched {
            Ok(())
        } else {
            Err(QuickMessageError::not_found(association.key()))
        }
    }

    pub fn take(&mut self, record_id: &RecordId) -> Option<Value> {
        let index = self
            .entries
            .iter()
            .position(|entry| &entry.record_id == record_id)?;
        Some(self.entries.remove(index).data)
    }

    pub fn take_all(&mut self, association: &Association) -> Vec<Value> {
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| &entry.association == association);
        self.entries = kept;
        taken.into_iter().map(|entry| entry.data).collect()
    }

    pub fn index(&self) -> Vec<(Association, RecordId)> {
        self.entries
            .iter()
            .map(|entry| (entry.association.clone(), entry.record_id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_keeps_insertion_order() {
        let mut doc = StoreDocument::default();
        let all = Association::new("all");
        doc.insert(all.clone(), json!(1));
        doc.insert(Association::new("other"), json!(2));
        doc.insert(all.clone(), json!(3));

        assert_eq!(doc.find(&all), vec![json!(1), json!(3)]);
        assert!(doc.find(&Association::new("missing")).is_empty());
    }

    #[test]
    fn test_replace_unknown_record_is_not_found() {
        let mut doc = StoreDocument::default();
        let err = doc.replace(&RecordId::from("nope"), json!(1)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_replace_all_and_take_all() {
        let mut doc = StoreDocument::default();
        let key = Association::new("k");
        doc.insert(key.clone(), json!("a"));
        doc.insert(key.clone(), json!("b"));
        doc.insert(Association::new("x"), json!("x"));

        doc.replace_all(&key, json!("c")).unwrap();
        assert_eq!(doc.find(&key), vec![json!("c"), json!("c")]);

        assert_eq!(doc.take_all(&key).len(), 2);
        assert_eq!(doc.entries.len(), 1);
        assert!(doc.replace_all(&key, json!("d")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_take_single_record() {
        let mut doc = StoreDocument::default();
        let id = doc.insert(Association::new("k"), json!("a"));

        assert_eq!(doc.take(&id), Some(json!("a")));
        assert_eq!(doc.take(&id), None);
    }
}
