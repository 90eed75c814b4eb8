use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::repositories::HistoryRepository;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(
    State(history_repo): State<Arc<dyn HistoryRepository>>,
) -> impl IntoResponse {
    match history_repo.load().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "history": "available",
                "tts": "available"
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "history": "unavailable",
                "tts": "unknown"
            })),
        ),
    }
}
