use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimilarityError>;

#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("Store error: {0}")]
    Store(#[from] nexora_store::StoreError),
}
