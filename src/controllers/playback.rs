use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::playback::{PlaybackService, PlaybackServiceError},
    error::{AppError, AppResult},
};

/// Request for PUT /api/playback/rate
#[derive(Debug, Serialize, Deserialize)]
pub struct SetRateRequest {
    pub rate: f32,
}

/// Response for GET /api/playback
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaybackResponse {
    pub rate: f32,
    pub asset_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_length: Option<usize>,
}

pub struct PlaybackController {
    playback_service: Arc<PlaybackService>,
}

impl PlaybackController {
    pub fn new(playback_service: Arc<PlaybackService>) -> Self {
        Self { playback_service }
    }

    /// GET /api/playback - Current rate and asset status
    pub async fn get_playback(
        State(controller): State<Arc<PlaybackController>>,
    ) -> Json<PlaybackResponse> {
        let rate = controller.playback_service.rate().await;
        let asset = controller.playback_service.current_asset().await;

        Json(PlaybackResponse {
            rate,
            asset_loaded: asset.is_some(),
            content_type: asset.as_ref().map(|a| a.content_type.to_string()),
            byte_length: asset.as_ref().map(|a| a.len()),
        })
    }

    /// PUT /api/playback/rate - Set the playback rate for the loaded asset
    pub async fn set_rate(
        State(controller): State<Arc<PlaybackController>>,
        Json(request): Json<SetRateRequest>,
    ) -> AppResult<StatusCode> {
        controller
            .playback_service
            .set_rate(request.rate)
            .await
            .map_err(AppError::from)?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// GET /api/playback/asset - The currently assembled audio
    pub async fn get_asset(
        State(controller): State<Arc<PlaybackController>>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let asset = controller
            .playback_service
            .current_asset()
            .await
            .ok_or_else(|| AppError::from(PlaybackServiceError::NoAssetLoaded))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, asset.content_type.parse().unwrap());

        Ok((StatusCode::OK, headers, Body::from(asset.bytes.clone())))
    }
}
