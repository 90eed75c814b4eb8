use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ConversionServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("text too large: {0}")]
    TooLarge(String),
    #[error("summarizer returned {actual} characters, over the {limit} character limit")]
    SummarizationContractViolation { actual: usize, limit: usize },
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("synthesis failed for chunk {index}: {reason}")]
    ChunkSynthesis { index: usize, reason: String },
    #[error("assembled audio does not match the synthesized chunks")]
    Assembly,
    #[error("conversion superseded by a newer request")]
    Superseded,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ConversionServiceError> for AppError {
    fn from(err: ConversionServiceError) -> Self {
        match err {
            ConversionServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ConversionServiceError::TooLarge(msg) => AppError::PayloadTooLarge(msg),
            err @ ConversionServiceError::SummarizationContractViolation { .. } => {
                AppError::ExternalService(err.to_string())
            }
            ConversionServiceError::Dependency(msg) => AppError::ExternalService(msg),
            err @ ConversionServiceError::ChunkSynthesis { .. } => {
                AppError::ExternalService(err.to_string())
            }
            err @ ConversionServiceError::Assembly => AppError::Internal(err.to_string()),
            err @ ConversionServiceError::Superseded => AppError::Conflict(err.to_string()),
            ConversionServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
