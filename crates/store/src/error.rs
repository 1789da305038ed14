use crate::collection::Collection;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed {collection} record: {message}")]
    MalformedRecord {
        collection: Collection,
        message: String,
    },

    #[error("Query against {0} timed out")]
    Timeout(Collection),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
