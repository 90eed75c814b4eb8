pub mod assembler;
pub mod chunk;
pub mod error;
pub mod service;
pub mod state;
pub mod voice;

pub use assembler::{AssembledAudio, AUDIO_CONTENT_TYPE};
pub use chunk::TextChunk;
pub use error::ConversionServiceError;
pub use service::{ConversionResult, ConversionService, ConversionServiceApi, ConversionSettings};
pub use state::PipelineState;
pub use voice::Voice;

use serde::{Deserialize, Serialize};

/// Request for POST /api/conversions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub text: String,
    #[serde(default)]
    pub voice: Voice,
}
