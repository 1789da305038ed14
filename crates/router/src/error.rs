use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouterError>;

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Store error: {0}")]
    Store(#[from] nexora_store::StoreError),
}
