//! TF-IDF similarity fallback over a tenant's serialized records.

pub mod corpus;
pub mod error;
pub mod fallback;
pub mod tfidf;

pub use corpus::DocumentCorpus;
pub use error::{Result, SimilarityError};
pub use fallback::{FallbackSearch, NO_ANSWER};
