use crate::collection::Collection;
use crate::document::Document;
use crate::error::{Result, StoreError};
use crate::filter::Filter;
use crate::DocumentStore;
use async_trait::async_trait;
use nexora_protocol::ObjectId;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// In-memory store, seedable from a JSON object keyed by collection name.
///
/// Insertion order is the store's natural order, which is what the domain
/// handlers' "first match" semantics rely on.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<Collection, Vec<Document>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, collection: Collection, value: Value) {
        self.collections
            .entry(collection)
            .or_default()
            .push(Document::new(value));
    }

    /// Parses a seed of the shape `{"budgets": [...], "customers": [...]}`.
    /// Unknown collection keys are skipped with a warning.
    pub fn from_seed(raw: &str) -> Result<Self> {
        let parsed: HashMap<String, Vec<Value>> = serde_json::from_str(raw)?;
        let mut store = Self::new();
        for (name, values) in parsed {
            let Some(collection) = Collection::from_name(&name) else {
                log::warn!("Skipping unknown seed collection {name:?}");
                continue;
            };
            for value in values {
                store.insert(collection, value);
            }
        }
        log::info!(
            "Seeded memory store with {} documents",
            store.document_count()
        );
        Ok(store)
    }

    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path.as_ref())
            .await
            .map_err(StoreError::from)?;
        Self::from_seed(&raw)
    }

    #[must_use]
    pub fn document_count(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }

    fn docs(&self, collection: Collection) -> &[Document] {
        self.collections
            .get(&collection)
            .map_or(&[], Vec::as_slice)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Document>> {
        Ok(self
            .docs(collection)
            .iter()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        company: ObjectId,
        collection: Collection,
        id: ObjectId,
    ) -> Result<Option<Document>> {
        Ok(self
            .docs(collection)
            .iter()
            .find(|doc| {
                doc.id() == Some(id)
                    && doc
                        .str_field("companyId")
                        .and_then(|raw| ObjectId::parse(raw).ok())
                        == Some(company)
            })
            .cloned())
    }
}
