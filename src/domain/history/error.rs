use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum HistoryServiceError {
    #[error("position {position} is out of range for {len} entries")]
    OutOfRange { position: usize, len: usize },
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<HistoryServiceError> for AppError {
    fn from(err: HistoryServiceError) -> Self {
        match err {
            err @ HistoryServiceError::OutOfRange { .. } => AppError::NotFound(err.to_string()),
            HistoryServiceError::Persistence(msg) => AppError::Internal(msg),
            HistoryServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
