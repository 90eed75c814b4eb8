use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    domain::{
        conversion::{
            ConversionRequest, ConversionService, ConversionServiceApi, PipelineState, Voice,
        },
        playback::PlaybackService,
    },
    error::{AppError, AppResult},
};

/// Voice descriptor for GET /api/voices
#[derive(Debug, Serialize)]
pub struct VoiceResponse {
    pub id: &'static str,
    pub name: &'static str,
}

pub struct ConversionController {
    conversion_service: Arc<ConversionService>,
    playback_service: Arc<PlaybackService>,
}

impl ConversionController {
    pub fn new(
        conversion_service: Arc<ConversionService>,
        playback_service: Arc<PlaybackService>,
    ) -> Self {
        Self {
            conversion_service,
            playback_service,
        }
    }

    /// POST /api/conversions - Convert text to a playable audio asset
    pub async fn convert(
        State(controller): State<Arc<ConversionController>>,
        Json(request): Json<ConversionRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let result = controller
            .conversion_service
            .convert(request)
            .await
            .map_err(AppError::from)?;

        if let Some(err) = &result.history_error {
            tracing::warn!(error = %err, "conversion succeeded but history was not updated");
        }

        // The presentation layer owns the produced asset for the session;
        // loading it makes it the current playback target.
        let asset = Arc::new(result.audio);
        controller.playback_service.load_asset(asset.clone()).await;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, asset.content_type.parse().unwrap());
        headers.insert(
            "X-Chunk-Count",
            result.chunk_count.to_string().parse().unwrap(),
        );
        headers.insert(
            "X-Character-Count",
            result.char_count.to_string().parse().unwrap(),
        );
        headers.insert(
            "X-Summarized",
            result.summarized.to_string().parse().unwrap(),
        );
        headers.insert(
            "X-History-Saved",
            result.history_error.is_none().to_string().parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(asset.bytes.clone())))
    }

    /// GET /api/conversions/state - Current pipeline phase
    pub async fn get_state(
        State(controller): State<Arc<ConversionController>>,
    ) -> Json<PipelineState> {
        Json(controller.conversion_service.state())
    }

    /// GET /api/voices - Supported voices for the picker
    pub async fn list_voices(
        State(_controller): State<Arc<ConversionController>>,
    ) -> Json<Vec<VoiceResponse>> {
        Json(
            Voice::all()
                .iter()
                .map(|voice| VoiceResponse {
                    id: voice.as_str(),
                    name: voice.display_name(),
                })
                .collect(),
        )
    }
}
