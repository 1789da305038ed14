use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nexora_protocol::ErrorEnvelope;
use nexora_store::StoreError;
use thiserror::Error;

/// The fixed boundary-validation sentence.
pub const INVALID_COMPANY_ID: &str = "מזהה החברה אינו תקין.";

/// Shown for any store-side failure; the envelope code carries the detail.
pub const STORE_TROUBLE: &str = "אירעה שגיאה בגישה לנתונים. נסה שוב מאוחר יותר.";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid company id")]
    InvalidCompanyId,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<nexora_router::RouterError> for ServiceError {
    fn from(err: nexora_router::RouterError) -> Self {
        match err {
            nexora_router::RouterError::Store(inner) => Self::Store(inner),
        }
    }
}

impl From<nexora_similarity::SimilarityError> for ServiceError {
    fn from(err: nexora_similarity::SimilarityError) -> Self {
        match err {
            nexora_similarity::SimilarityError::Store(inner) => Self::Store(inner),
        }
    }
}

impl ServiceError {
    fn envelope(&self) -> (StatusCode, ErrorEnvelope) {
        match self {
            Self::InvalidCompanyId => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::new("invalid_company_id", INVALID_COMPANY_ID)
                    .with_hint("companyId must be a 24-character hex string"),
            ),
            Self::Store(StoreError::Timeout(collection)) => (
                StatusCode::BAD_GATEWAY,
                ErrorEnvelope::new("store_timeout", STORE_TROUBLE)
                    .with_hint(format!("query against {collection} timed out")),
            ),
            Self::Store(err) => (
                StatusCode::BAD_GATEWAY,
                ErrorEnvelope::new("store_error", STORE_TROUBLE).with_hint(err.to_string()),
            ),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, envelope) = self.envelope();
        if status.is_server_error() {
            log::error!("Chat request failed: {self}");
        }
        (status, Json(envelope)).into_response()
    }
}
