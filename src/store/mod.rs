//! Remote document store access.
//!
//! The store is consumed through the `DocumentStore` capability trait so the
//! composition root decides which implementation the app talks to:
//! `HttpStore` against the hosted service, or `MemoryStore` in tests.

mod http;
mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::ToolFields;
use crate::error::Result;

pub use http::{HttpStore, HttpStoreConfig};
pub use memory::MemoryStore;

/// A document as the store returns it: an opaque identifier plus fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identifier.
    pub id: String,
    /// The record's fields.
    #[serde(default)]
    pub fields: ToolFields,
}

/// Client operations against one named collection.
///
/// Three operations are consumed, nothing more: list everything, create a
/// document, patch a document. No deletes, no queries, no subscriptions.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List every document in the collection, in store order.
    async fn list(&self) -> Result<Vec<Document>>;

    /// Create a document from the given fields; returns the assigned id.
    async fn create(&self, fields: &ToolFields) -> Result<String>;

    /// Patch the document at `id` with the given partial fields.
    async fn patch(&self, id: &str, fields: &ToolFields) -> Result<()>;
}
