//! Read-only access to the multi-tenant business document store.
//!
//! The real database driver lives outside this workspace; everything here
//! talks to [`DocumentStore`], and the in-memory implementation backs tests
//! and the seeded demo server. Every read path is tenant-scoped: filters
//! carry their company id by construction and id lookups take one
//! explicitly.

use async_trait::async_trait;
use nexora_protocol::ObjectId;

pub mod collection;
pub mod document;
pub mod error;
pub mod filter;
pub mod memory;
pub mod records;
pub mod timed;

pub use collection::Collection;
pub use document::Document;
pub use error::{Result, StoreError};
pub use filter::Filter;
pub use memory::MemoryStore;
pub use timed::TimedStore;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of `collection` matching `filter`, in the store's
    /// natural order.
    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Document>>;

    /// First match in natural order, if any.
    async fn find_one(&self, collection: Collection, filter: &Filter) -> Result<Option<Document>> {
        Ok(self.find(collection, filter).await?.into_iter().next())
    }

    /// Single document by `_id`, scoped to `company`. An id belonging to
    /// another tenant resolves to `None`, never to that tenant's record.
    async fn find_by_id(
        &self,
        company: ObjectId,
        collection: Collection,
        id: ObjectId,
    ) -> Result<Option<Document>>;
}
