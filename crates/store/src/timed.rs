use crate::collection::Collection;
use crate::document::Document;
use crate::error::{Result, StoreError};
use crate::filter::Filter;
use crate::DocumentStore;
use async_trait::async_trait;
use nexora_protocol::ObjectId;
use std::time::Duration;

/// Decorator that bounds every store call.
///
/// An elapsed call surfaces as [`StoreError::Timeout`], which the service
/// maps to an upstream error status, distinct from an ordinary "not found"
/// answer.
pub struct TimedStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S> TimedStore<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

impl<S: DocumentStore> TimedStore<S> {
    async fn bounded<T>(
        &self,
        collection: Collection,
        fut: impl std::future::Future<Output = Result<T>> + Send,
    ) -> Result<T> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!(
                    "Store query against {collection} exceeded {:?}",
                    self.timeout
                );
                Err(StoreError::Timeout(collection))
            }
        }
    }
}

#[async_trait]
impl<S: DocumentStore> DocumentStore for TimedStore<S> {
    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Document>> {
        self.bounded(collection, self.inner.find(collection, filter))
            .await
    }

    async fn find_one(&self, collection: Collection, filter: &Filter) -> Result<Option<Document>> {
        self.bounded(collection, self.inner.find_one(collection, filter))
            .await
    }

    async fn find_by_id(
        &self,
        company: ObjectId,
        collection: Collection,
        id: ObjectId,
    ) -> Result<Option<Document>> {
        self.bounded(collection, self.inner.find_by_id(company, collection, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    struct StalledStore;

    #[async_trait]
    impl DocumentStore for StalledStore {
        async fn find(&self, _collection: Collection, _filter: &Filter) -> Result<Vec<Document>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Vec::new())
        }

        async fn find_by_id(
            &self,
            _company: ObjectId,
            _collection: Collection,
            _id: ObjectId,
        ) -> Result<Option<Document>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(None)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_queries_surface_as_timeout() {
        let store = TimedStore::new(StalledStore, Duration::from_millis(50));
        let filter = Filter::scoped(ObjectId::parse("aaaaaaaaaaaaaaaaaaaaaaaa").unwrap());
        let err = store
            .find(Collection::Budgets, &filter)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Timeout(Collection::Budgets)));
    }

    #[tokio::test]
    async fn fast_queries_pass_through() {
        let store = TimedStore::new(MemoryStore::new(), Duration::from_secs(5));
        let filter = Filter::scoped(ObjectId::parse("aaaaaaaaaaaaaaaaaaaaaaaa").unwrap());
        let docs = store.find(Collection::Budgets, &filter).await.unwrap();
        assert!(docs.is_empty());
    }
}
