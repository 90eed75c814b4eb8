use crate::domain::conversion::Voice;
use async_trait::async_trait;

/// Boundary adapter for the TTS vendor.
///
/// One invocation is one outbound synthesis call for exactly one chunk of
/// text: at most once, no internal retry, no state kept between calls.
/// Retry policy, if any, belongs to the orchestrator.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize a single chunk of text with the given voice
    ///
    /// Returns one self-contained MP3 encoding of exactly the chunk's text.
    ///
    /// # Errors
    /// Returns error if the vendor rejects the fragment or is unavailable
    async fn synthesize_chunk(&self, text: &str, voice: Voice) -> Result<Vec<u8>, String>;
}
