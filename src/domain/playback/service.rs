use super::error::PlaybackServiceError;
use crate::domain::conversion::AssembledAudio;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const MIN_PLAYBACK_RATE: f32 = 0.5;
pub const MAX_PLAYBACK_RATE: f32 = 2.0;
const DEFAULT_PLAYBACK_RATE: f32 = 1.0;

/// Playback-time view over the currently assembled asset.
///
/// The rate is a session parameter applied when the asset is played; the
/// stored bytes are never modified and the rate is never persisted.
pub struct PlaybackService {
    asset: RwLock<Option<Arc<AssembledAudio>>>,
    rate: RwLock<f32>,
}

impl PlaybackService {
    pub fn new() -> Self {
        Self {
            asset: RwLock::new(None),
            rate: RwLock::new(DEFAULT_PLAYBACK_RATE),
        }
    }

    /// Replace the displayed asset. A newer conversion supersedes the
    /// previous one at this boundary.
    pub async fn load_asset(&self, asset: Arc<AssembledAudio>) {
        *self.asset.write().await = Some(asset);
    }

    pub async fn current_asset(&self) -> Option<Arc<AssembledAudio>> {
        self.asset.read().await.clone()
    }

    pub async fn rate(&self) -> f32 {
        *self.rate.read().await
    }

    /// Set the playback rate for the loaded asset.
    ///
    /// The range check comes first: an out-of-range rate is rejected even
    /// when nothing is loaded.
    pub async fn set_rate(&self, rate: f32) -> Result<(), PlaybackServiceError> {
        if !(MIN_PLAYBACK_RATE..=MAX_PLAYBACK_RATE).contains(&rate) {
            return Err(PlaybackServiceError::InvalidRate(rate));
        }

        if self.asset.read().await.is_none() {
            return Err(PlaybackServiceError::NoAssetLoaded);
        }

        *self.rate.write().await = rate;
        Ok(())
    }
}

impl Default for PlaybackService {
    fn default() -> Self {
        Self::new()
    }
}
