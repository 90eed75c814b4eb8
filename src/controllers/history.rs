use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::history::{HistoryEntry, HistoryService},
    error::AppResult,
};

pub struct HistoryController {
    history_service: Arc<HistoryService>,
}

impl HistoryController {
    pub fn new(history_service: Arc<HistoryService>) -> Self {
        Self { history_service }
    }

    /// GET /api/history - Ordered past inputs
    pub async fn list_entries(
        State(controller): State<Arc<HistoryController>>,
    ) -> Json<Vec<HistoryEntry>> {
        Json(controller.history_service.entries().await)
    }

    /// DELETE /api/history/{position} - Remove one entry
    pub async fn remove_entry(
        State(controller): State<Arc<HistoryController>>,
        Path(position): Path<usize>,
    ) -> AppResult<StatusCode> {
        controller.history_service.remove_at(position).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
