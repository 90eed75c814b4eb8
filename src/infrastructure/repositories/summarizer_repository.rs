use async_trait::async_trait;

/// Boundary adapter for the external summarizer.
///
/// The only assumed guarantee: the returned text is at most `max_chars`
/// characters. The orchestrator verifies the bound and fails fast when an
/// implementation violates it.
#[async_trait]
pub trait SummarizerRepository: Send + Sync {
    /// Condense `text` to at most `max_chars` characters
    async fn summarize(&self, text: &str, max_chars: usize) -> Result<String, String>;
}
