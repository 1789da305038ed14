use nexora_protocol::ObjectId;
use nexora_similarity::DocumentCorpus;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Per-tenant caches: the similarity corpus and the answer memo.
///
/// Both maps are keyed by company id, so tenants can never observe each
/// other's entries. A corpus is built outside the lock and published with a
/// single write; once published it is immutable and shared via `Arc`, and
/// the first publisher wins. Memos are unbounded and keyed by the exact
/// question text, never normalized.
#[derive(Default)]
pub struct TenantCaches {
    corpora: RwLock<HashMap<ObjectId, Arc<DocumentCorpus>>>,
    answers: RwLock<HashMap<ObjectId, HashMap<String, String>>>,
}

impl TenantCaches {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn corpus(&self, company: ObjectId) -> Option<Arc<DocumentCorpus>> {
        self.corpora.read().await.get(&company).cloned()
    }

    /// Publishes a freshly loaded corpus unless a concurrent request beat
    /// us to it; either way the tenant's canonical corpus is returned.
    pub async fn publish_corpus(
        &self,
        company: ObjectId,
        corpus: DocumentCorpus,
    ) -> Arc<DocumentCorpus> {
        let mut corpora = self.corpora.write().await;
        corpora
            .entry(company)
            .or_insert_with(|| Arc::new(corpus))
            .clone()
    }

    pub async fn remembered(&self, company: ObjectId, question: &str) -> Option<String> {
        self.answers
            .read()
            .await
            .get(&company)
            .and_then(|memo| memo.get(question))
            .cloned()
    }

    pub async fn remember(&self, company: ObjectId, question: &str, reply: &str) {
        self.answers
            .write()
            .await
            .entry(company)
            .or_default()
            .insert(question.to_string(), reply.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn company_a() -> ObjectId {
        ObjectId::parse("aaaaaaaaaaaaaaaaaaaaaaaa").unwrap()
    }

    fn company_b() -> ObjectId {
        ObjectId::parse("bbbbbbbbbbbbbbbbbbbbbbbb").unwrap()
    }

    #[tokio::test]
    async fn memos_are_tenant_keyed_and_exact_match() {
        let caches = TenantCaches::new();
        caches.remember(company_a(), "מה המצב?", "הכל טוב").await;

        assert_eq!(
            caches.remembered(company_a(), "מה המצב?").await.as_deref(),
            Some("הכל טוב")
        );
        assert_eq!(caches.remembered(company_b(), "מה המצב?").await, None);
        // Different phrasing bypasses the memo entirely.
        assert_eq!(caches.remembered(company_a(), "מה  המצב?").await, None);
    }

    #[tokio::test]
    async fn first_published_corpus_wins() {
        let caches = TenantCaches::new();
        let first = caches
            .publish_corpus(
                company_a(),
                DocumentCorpus::from_texts(vec!["a".to_string()]),
            )
            .await;
        let second = caches
            .publish_corpus(
                company_a(),
                DocumentCorpus::from_texts(vec!["b".to_string()]),
            )
            .await;
        assert_eq!(first.docs(), second.docs());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn corpora_are_tenant_keyed() {
        let caches = TenantCaches::new();
        caches
            .publish_corpus(
                company_a(),
                DocumentCorpus::from_texts(vec!["a-doc".to_string()]),
            )
            .await;
        assert!(caches.corpus(company_a()).await.is_some());
        assert!(caches.corpus(company_b()).await.is_none());
    }
}
