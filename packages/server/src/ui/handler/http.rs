//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use hiroba_shared::protocol::MessageLogPayload;

use crate::{
    infrastructure::dto::{conversion::to_log_payload, http::StatsDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current session count and log length
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsDto>, StatusCode> {
    match state.hub.stats().await {
        Ok(stats) => Ok(Json(stats.into())),
        Err(e) => {
            tracing::error!("Failed to read stats: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// The full message log in append order
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageLogPayload>, StatusCode> {
    match state.hub.snapshot().await {
        Ok(entries) => Ok(Json(to_log_payload(&entries))),
        Err(e) => {
            tracing::error!("Failed to read message log: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
