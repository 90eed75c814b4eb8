use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackServiceError {
    #[error("playback rate {0} is outside the supported 0.5-2.0 range")]
    InvalidRate(f32),
    #[error("no audio asset is loaded")]
    NoAssetLoaded,
}

impl From<PlaybackServiceError> for AppError {
    fn from(err: PlaybackServiceError) -> Self {
        match err {
            err @ PlaybackServiceError::InvalidRate(_) => AppError::BadRequest(err.to_string()),
            err @ PlaybackServiceError::NoAssetLoaded => AppError::Conflict(err.to_string()),
        }
    }
}
