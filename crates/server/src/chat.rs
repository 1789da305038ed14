use crate::caches::TenantCaches;
use crate::error::ServiceError;
use nexora_protocol::ObjectId;
use nexora_router::{route, Question, RouteContext};
use nexora_similarity::{DocumentCorpus, FallbackSearch};
use nexora_store::DocumentStore;
use std::sync::Arc;

/// Orchestrates one chat turn: memo lookup, lazy corpus load, keyword
/// routing, similarity fallback, memoization.
pub struct ChatService {
    store: Arc<dyn DocumentStore>,
    caches: TenantCaches,
    fallback: FallbackSearch,
}

impl ChatService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            caches: TenantCaches::new(),
            fallback: FallbackSearch::new(),
        }
    }

    /// Answers `message` for the tenant in `company_raw`.
    ///
    /// A memo hit returns before any store access. Otherwise the tenant's
    /// corpus is loaded on first use, the keyword router gets the first
    /// shot, and unclaimed questions fall through to similarity search.
    pub async fn answer(&self, company_raw: &str, message: &str) -> Result<String, ServiceError> {
        let company =
            ObjectId::parse(company_raw).map_err(|_| ServiceError::InvalidCompanyId)?;

        if let Some(reply) = self.caches.remembered(company, message).await {
            log::debug!("Memo hit for company {company}");
            return Ok(reply);
        }

        let corpus = self.ensure_corpus(company).await?;

        let question = Question::new(message);
        let ctx = RouteContext::new(self.store.as_ref(), company);
        let reply = match route(&ctx, &question).await? {
            Some(outcome) => outcome.into_reply(),
            None => self.fallback.reply(&corpus, question.raw()),
        };

        self.caches.remember(company, message, &reply).await;
        log::debug!("Learned answer for {message:?}");
        Ok(reply)
    }

    async fn ensure_corpus(
        &self,
        company: ObjectId,
    ) -> Result<Arc<DocumentCorpus>, ServiceError> {
        if let Some(corpus) = self.caches.corpus(company).await {
            return Ok(corpus);
        }
        let corpus = DocumentCorpus::load(self.store.as_ref(), company).await?;
        Ok(self.caches.publish_corpus(company, corpus).await)
    }
}
