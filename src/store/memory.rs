//! In-memory document store.
//!
//! Backs tests and offline experiments. Ids are assigned sequentially the
//! way the hosted store assigns opaque ids. Failure of the next create or
//! patch can be armed to exercise the error paths.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;

use super::{Document, DocumentStore};
use crate::domain::{Field, ToolFields};
use crate::error::{Result, TroveError};

/// In-memory implementation of `DocumentStore`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: Mutex<Vec<Document>>,
    next_id: AtomicU64,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_patch: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with documents.
    pub fn with_documents(docs: Vec<Document>) -> Self {
        Self {
            docs: Mutex::new(docs),
            ..Default::default()
        }
    }

    /// Make the next list call fail.
    pub fn fail_next_list(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }

    /// Make the next create call fail.
    pub fn fail_next_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }

    /// Make the next patch call fail.
    pub fn fail_next_patch(&self) {
        self.fail_patch.store(true, Ordering::SeqCst);
    }

    /// Snapshot of the stored documents.
    pub fn documents(&self) -> Vec<Document> {
        self.docs.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Document>> {
        if self.fail_list.swap(false, Ordering::SeqCst) {
            return Err(TroveError::Store("simulated list rejection".to_string()));
        }
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn create(&self, fields: &ToolFields) -> Result<String> {
        if self.fail_create.swap(false, Ordering::SeqCst) {
            return Err(TroveError::Store("simulated create rejection".to_string()));
        }

        let id = format!("doc-{:04}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.docs.lock().unwrap().push(Document {
            id: id.clone(),
            fields: fields.clone(),
        });
        Ok(id)
    }

    async fn patch(&self, id: &str, fields: &ToolFields) -> Result<()> {
        if self.fail_patch.swap(false, Ordering::SeqCst) {
            return Err(TroveError::Store("simulated patch rejection".to_string()));
        }

        let mut docs = self.docs.lock().unwrap();
        let doc = docs
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| TroveError::DocumentNotFound(id.to_string()))?;

        for field in [Field::Title, Field::Description, Field::Url] {
            if let Some(value) = fields.get(field) {
                doc.fields.set(field, value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, description: &str, url: &str) -> ToolFields {
        let mut f = ToolFields::new();
        f.set(Field::Title, title);
        f.set(Field::Description, description);
        f.set(Field::Url, url);
        f
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.create(&fields("A", "", "")).await.unwrap();
        let b = store.create(&fields("B", "", "")).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.documents().len(), 2);
    }

    #[tokio::test]
    async fn test_list_returns_insertion_order() {
        let store = MemoryStore::new();
        store.create(&fields("A", "", "")).await.unwrap();
        store.create(&fields("B", "", "")).await.unwrap();

        let docs = store.list().await.unwrap();
        assert_eq!(docs[0].fields.get(Field::Title), Some("A"));
        assert_eq!(docs[1].fields.get(Field::Title), Some("B"));
    }

    #[tokio::test]
    async fn test_patch_merges_partial_fields() {
        let store = MemoryStore::new();
        let id = store.create(&fields("A", "old", "u")).await.unwrap();

        let mut changes = ToolFields::new();
        changes.set(Field::Description, "new");
        store.patch(&id, &changes).await.unwrap();

        let docs = store.documents();
        assert_eq!(docs[0].fields.get(Field::Title), Some("A"));
        assert_eq!(docs[0].fields.get(Field::Description), Some("new"));
        assert_eq!(docs[0].fields.get(Field::Url), Some("u"));
    }

    #[tokio::test]
    async fn test_patch_unknown_id() {
        let store = MemoryStore::new();
        let err = store.patch("missing", &ToolFields::new()).await.unwrap_err();
        assert!(matches!(err, TroveError::DocumentNotFound(_)));
    }

    #[tokio::test]
    async fn test_fail_next_list_arms_once() {
        let store = MemoryStore::new();
        store.fail_next_list();
        assert!(store.list().await.is_err());
        assert!(store.list().await.is_ok());
    }

    #[tokio::test]
    async fn test_fail_next_create_arms_once() {
        let store = MemoryStore::new();
        store.fail_next_create();
        assert!(store.create(&ToolFields::new()).await.is_err());
        assert!(store.create(&ToolFields::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_fail_next_patch_arms_once() {
        let store = MemoryStore::new();
        let id = store.create(&ToolFields::new()).await.unwrap();
        store.fail_next_patch();
        assert!(store.patch(&id, &ToolFields::new()).await.is_err());
        assert!(store.patch(&id, &ToolFields::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_with_documents_seed() {
        let store = MemoryStore::with_documents(vec![Document {
            id: "seed".to_string(),
            fields: fields("S", "", ""),
        }]);
        let docs = store.list().await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "seed");
    }
}
