use super::assembler::{self, AssembledAudio};
use super::chunk::{self, TextChunk};
use super::error::ConversionServiceError;
use super::state::PipelineState;
use super::voice::Voice;
use super::ConversionRequest;
use crate::domain::history::{HistoryService, HistoryServiceError};
use crate::infrastructure::repositories::{SummarizerRepository, TtsRepository};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Pipeline tunables, taken from `Config` at startup.
#[derive(Debug, Clone)]
pub struct ConversionSettings {
    /// Maximum characters per synthesis request
    pub chunk_size: usize,
    /// Texts longer than this are summarized before synthesis
    pub over_length_threshold: usize,
    /// Hard safety cap on accepted input length
    pub max_text_chars: usize,
    /// Synthesis calls kept in flight at once
    pub synthesis_concurrency: usize,
}

/// Outcome of one successful conversion.
///
/// `history_error` carries a failed history write: the caller still gets the
/// audio, but must be able to tell the durable log was not updated.
#[derive(Debug)]
pub struct ConversionResult {
    pub audio: AssembledAudio,
    pub chunk_count: usize,
    pub char_count: usize,
    pub summarized: bool,
    pub history_error: Option<HistoryServiceError>,
}

pub struct ConversionService {
    tts_repo: Arc<dyn TtsRepository>,
    summarizer_repo: Arc<dyn SummarizerRepository>,
    history_service: Arc<HistoryService>,
    settings: ConversionSettings,
    state_tx: watch::Sender<PipelineState>,
    generation: AtomicU64,
}

impl ConversionService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        summarizer_repo: Arc<dyn SummarizerRepository>,
        history_service: Arc<HistoryService>,
        settings: ConversionSettings,
    ) -> Self {
        let (state_tx, _) = watch::channel(PipelineState::Idle);

        Self {
            tts_repo,
            summarizer_repo,
            history_service,
            settings,
            state_tx,
            generation: AtomicU64::new(0),
        }
    }

    /// Current externally visible pipeline state
    pub fn state(&self) -> PipelineState {
        self.state_tx.borrow().clone()
    }

    /// Watch pipeline state changes as they happen
    pub fn subscribe_state(&self) -> watch::Receiver<PipelineState> {
        self.state_tx.subscribe()
    }
}

#[async_trait]
pub trait ConversionServiceApi: Send + Sync {
    /// Convert text into one playable audio asset
    ///
    /// This operation:
    /// - Normalizes and length-checks the input
    /// - Summarizes over-length text through the external summarizer
    /// - Splits into chunks and synthesizes them with bounded concurrency
    /// - Assembles the per-chunk audio in chunk order, all-or-nothing
    /// - Appends the original text to history on success
    ///
    /// A request that is superseded by a newer one before it completes is
    /// discarded: no history entry, no published state, `Superseded` error.
    async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionResult, ConversionServiceError>;
}

#[async_trait]
impl ConversionServiceApi for ConversionService {
    async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionResult, ConversionServiceError> {
        // Claiming the next generation supersedes any conversion still in
        // flight: its result will be discarded when it completes.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::info!(
            text_length = request.text.len(),
            voice = %request.voice,
            "conversion request"
        );

        let result = self.run_pipeline(&request, generation).await;

        match &result {
            Ok(outcome) => {
                tracing::info!(
                    chunk_count = outcome.chunk_count,
                    audio_size = outcome.audio.len(),
                    summarized = outcome.summarized,
                    history_saved = outcome.history_error.is_none(),
                    "conversion completed"
                );
                self.publish(generation, PipelineState::Ready);
            }
            Err(ConversionServiceError::Superseded) => {
                // a newer conversion owns the visible state now
            }
            Err(e) => {
                self.publish(
                    generation,
                    PipelineState::Failed {
                        message: e.to_string(),
                    },
                );
            }
        }

        result
    }
}

impl ConversionService {
    async fn run_pipeline(
        &self,
        request: &ConversionRequest,
        generation: u64,
    ) -> Result<ConversionResult, ConversionServiceError> {
        if request.text.is_empty() {
            return Err(ConversionServiceError::Invalid(
                "text cannot be empty".to_string(),
            ));
        }

        let normalized = chunk::normalize(&request.text);
        let char_count = normalized.chars().count();
        if char_count > self.settings.max_text_chars {
            return Err(ConversionServiceError::TooLarge(format!(
                "text is {} characters, the maximum is {}",
                char_count, self.settings.max_text_chars
            )));
        }

        // The audio is synthesized from the summary when the text is over
        // the threshold; history always keeps the original.
        let (speech_text, summarized) = if char_count > self.settings.over_length_threshold {
            self.publish(generation, PipelineState::Summarizing);
            let summary = self.summarize(&normalized).await?;
            (summary, true)
        } else {
            (normalized, false)
        };

        self.publish(generation, PipelineState::Chunking);
        let chunks = chunk::split(&speech_text, self.settings.chunk_size);

        let buffers = self
            .synthesize_chunks(&chunks, request.voice, generation)
            .await?;

        self.publish(generation, PipelineState::Assembling);
        let expected_len: usize = buffers.iter().map(Vec::len).sum();
        let audio = assembler::assemble(buffers);
        if audio.len() != expected_len {
            return Err(ConversionServiceError::Assembly);
        }

        if !self.is_current(generation) {
            tracing::info!(generation, "conversion superseded, discarding result");
            return Err(ConversionServiceError::Superseded);
        }

        let history_error = match self.history_service.append(request.text.clone()).await {
            Ok(_) => None,
            Err(e) => {
                tracing::error!(error = %e, "audio produced but history append failed");
                Some(e)
            }
        };

        Ok(ConversionResult {
            audio,
            chunk_count: chunks.len(),
            char_count,
            summarized,
            history_error,
        })
    }

    async fn summarize(&self, text: &str) -> Result<String, ConversionServiceError> {
        let limit = self.settings.over_length_threshold;

        let summary = self
            .summarizer_repo
            .summarize(text, limit)
            .await
            .map_err(ConversionServiceError::Dependency)?;

        let actual = summary.chars().count();
        if actual > limit {
            return Err(ConversionServiceError::SummarizationContractViolation { actual, limit });
        }

        tracing::info!(
            original_chars = text.chars().count(),
            summary_chars = actual,
            "text summarized before synthesis"
        );

        Ok(summary)
    }

    async fn synthesize_chunks(
        &self,
        chunks: &[TextChunk],
        voice: Voice,
        generation: u64,
    ) -> Result<Vec<Vec<u8>>, ConversionServiceError> {
        let total = chunks.len();
        self.publish(
            generation,
            PipelineState::Synthesizing {
                completed: 0,
                total,
            },
        );

        // Bounded fan-out: `buffered` yields results in dispatch order, so
        // the assembled audio keeps the chunk order no matter which call
        // finishes first. The first failure drops the stream, aborting the
        // chunks not yet dispatched.
        let jobs: Vec<(usize, String)> = chunks
            .iter()
            .map(|chunk| (chunk.index, chunk.content.clone()))
            .collect();
        let mut results = stream::iter(jobs.into_iter().map(|(index, content)| {
            let tts_repo = Arc::clone(&self.tts_repo);
            async move {
                tts_repo
                    .synthesize_chunk(&content, voice)
                    .await
                    .map_err(|reason| ConversionServiceError::ChunkSynthesis { index, reason })
            }
        }))
        .buffered(self.settings.synthesis_concurrency.max(1));

        let mut buffers = Vec::with_capacity(total);
        while let Some(result) = results.next().await {
            let bytes = result?;
            buffers.push(bytes);
            self.publish(
                generation,
                PipelineState::Synthesizing {
                    completed: buffers.len(),
                    total,
                },
            );
        }

        Ok(buffers)
    }

    /// Publish a state transition, unless a newer conversion took over.
    fn publish(&self, generation: u64, state: PipelineState) {
        if self.is_current(generation) {
            self.state_tx.send_replace(state);
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
