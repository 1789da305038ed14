use crate::error::Result;
use nexora_protocol::ObjectId;
use nexora_store::{Collection, DocumentStore, Filter};

/// One tenant's serialized records, the haystack for similarity search.
///
/// Loaded lazily on a tenant's first request and then kept as-is; staleness
/// against the underlying store is accepted.
#[derive(Debug, Clone, Default)]
pub struct DocumentCorpus {
    docs: Vec<String>,
}

impl DocumentCorpus {
    #[must_use]
    pub fn from_texts(docs: Vec<String>) -> Self {
        Self { docs }
    }

    /// Serializes every record of every collection the tenant owns, in the
    /// canonical collection order.
    pub async fn load(store: &dyn DocumentStore, company: ObjectId) -> Result<Self> {
        let filter = Filter::scoped(company);
        let mut docs = Vec::new();
        for collection in Collection::ALL {
            for doc in store.find(collection, &filter).await? {
                docs.push(doc.to_text());
            }
        }
        log::info!("Loaded {} documents for company {company}", docs.len());
        Ok(Self { docs })
    }

    #[must_use]
    pub fn docs(&self) -> &[String] {
        &self.docs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexora_store::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn load_only_collects_the_requested_tenant() {
        let company_a = ObjectId::parse("aaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
        let company_b = ObjectId::parse("bbbbbbbbbbbbbbbbbbbbbbbb").unwrap();

        let mut store = MemoryStore::new();
        store.insert(
            Collection::Products,
            json!({
                "_id": "100000000000000000000001",
                "companyId": company_a.to_string(),
                "productName": "מסך",
            }),
        );
        store.insert(
            Collection::Products,
            json!({
                "_id": "100000000000000000000002",
                "companyId": company_b.to_string(),
                "productName": "מקלדת",
            }),
        );

        let corpus = DocumentCorpus::load(&store, company_a).await.unwrap();
        assert_eq!(corpus.len(), 1);
        assert!(corpus.docs()[0].contains("מסך"));
        assert!(!corpus.docs()[0].contains("מקלדת"));
    }

    #[tokio::test]
    async fn empty_tenant_loads_an_empty_corpus() {
        let store = MemoryStore::new();
        let company = ObjectId::parse("cccccccccccccccccccccccc").unwrap();
        let corpus = DocumentCorpus::load(&store, company).await.unwrap();
        assert!(corpus.is_empty());
    }
}
