use crate::chat::ChatService;
use crate::error::ServiceError;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use nexora_protocol::{ChatRequest, ChatReply};
use serde_json::json;
use std::sync::Arc;

/// Builds the HTTP surface: the chat endpoint and a liveness probe.
pub fn build_app(service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .with_state(service)
}

async fn chat_handler(
    State(service): State<Arc<ChatService>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ServiceError> {
    let reply = service
        .answer(&request.company_id, &request.message)
        .await?;
    Ok(Json(ChatReply::new(reply)))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
