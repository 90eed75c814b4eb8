use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use voicepad_backend::controllers::conversion::ConversionController;
use voicepad_backend::controllers::history::HistoryController;
use voicepad_backend::controllers::playback::PlaybackController;
use voicepad_backend::domain::conversion::{ConversionService, ConversionSettings, Voice};
use voicepad_backend::domain::history::HistoryService;
use voicepad_backend::domain::playback::PlaybackService;
use voicepad_backend::infrastructure::http::build_router;
use voicepad_backend::infrastructure::repositories::{
    HistoryRepository, SummarizerRepository, TtsRepository,
};

#[allow(dead_code)]
pub fn mock_audio_bytes() -> Vec<u8> {
    // Minimal valid MP3 file (silence)
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
        0x00, 0x00, 0x00, 0x00, // Some padding
    ]
}

/// TTS stub that echoes the chunk text back as audio bytes, so ordering and
/// content can be asserted on the assembled asset.
pub struct EchoTtsRepository {
    calls: AtomicUsize,
    fail_on_prefix: Option<char>,
    delays_ms: Vec<u64>,
}

impl EchoTtsRepository {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on_prefix: None,
            delays_ms: Vec::new(),
        }
    }

    /// Fail any chunk whose text starts with `prefix`
    pub fn failing_on_prefix(prefix: char) -> Self {
        Self {
            fail_on_prefix: Some(prefix),
            ..Self::new()
        }
    }

    /// The nth call sleeps `delays_ms[n]` before answering, letting tests
    /// force out-of-order completion.
    pub fn with_delays(delays_ms: Vec<u64>) -> Self {
        Self {
            delays_ms,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsRepository for EchoTtsRepository {
    async fn synthesize_chunk(&self, text: &str, _voice: Voice) -> Result<Vec<u8>, String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays_ms.get(call) {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }

        if let Some(prefix) = self.fail_on_prefix {
            if text.starts_with(prefix) {
                return Err("vendor rejected the fragment".to_string());
            }
        }

        Ok(text.as_bytes().to_vec())
    }
}

/// Summarizer stub returning a fixed summary
pub struct StubSummarizerRepository {
    calls: AtomicUsize,
    summary: String,
}

impl StubSummarizerRepository {
    pub fn returning(summary: impl Into<String>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            summary: summary.into(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummarizerRepository for StubSummarizerRepository {
    async fn summarize(&self, _text: &str, _max_chars: usize) -> Result<String, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.summary.clone())
    }
}

/// In-memory stand-in for the durable history medium
pub struct InMemoryHistoryRepository {
    saved: std::sync::Mutex<Vec<String>>,
    fail_saves: bool,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            saved: std::sync::Mutex::new(Vec::new()),
            fail_saves: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::new()
        }
    }

    /// What the durable medium currently holds
    pub fn snapshot(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn load(&self) -> Result<Vec<String>, String> {
        Ok(self.saved.lock().unwrap().clone())
    }

    async fn save(&self, entries: &[String]) -> Result<(), String> {
        if self.fail_saves {
            return Err("backing store unavailable".to_string());
        }
        *self.saved.lock().unwrap() = entries.to_vec();
        Ok(())
    }
}

pub struct TestPipeline {
    pub conversion: Arc<ConversionService>,
    pub history: Arc<HistoryService>,
    pub tts: Arc<EchoTtsRepository>,
    pub summarizer: Arc<StubSummarizerRepository>,
    pub history_repo: Arc<InMemoryHistoryRepository>,
}

pub fn settings(chunk_size: usize, over_length_threshold: usize) -> ConversionSettings {
    ConversionSettings {
        chunk_size,
        over_length_threshold,
        max_text_chars: 50_000,
        synthesis_concurrency: 3,
    }
}

pub async fn build_pipeline(
    settings: ConversionSettings,
    tts: EchoTtsRepository,
    summarizer: StubSummarizerRepository,
    history_repo: InMemoryHistoryRepository,
) -> TestPipeline {
    let tts = Arc::new(tts);
    let summarizer = Arc::new(summarizer);
    let history_repo = Arc::new(history_repo);

    let history = Arc::new(
        HistoryService::load(Arc::clone(&history_repo) as Arc<dyn HistoryRepository>)
            .await
            .unwrap(),
    );

    let conversion = Arc::new(ConversionService::new(
        Arc::clone(&tts) as Arc<dyn TtsRepository>,
        Arc::clone(&summarizer) as Arc<dyn SummarizerRepository>,
        Arc::clone(&history),
        settings,
    ));

    TestPipeline {
        conversion,
        history,
        tts,
        summarizer,
        history_repo,
    }
}

/// Full application router over stubbed vendors, for route-level tests
pub async fn build_test_app() -> (axum::Router, TestPipeline) {
    let pipeline = build_pipeline(
        settings(1000, 2000),
        EchoTtsRepository::new(),
        StubSummarizerRepository::returning(""),
        InMemoryHistoryRepository::new(),
    )
    .await;

    let playback_service = Arc::new(PlaybackService::new());

    let conversion_controller = Arc::new(ConversionController::new(
        Arc::clone(&pipeline.conversion),
        Arc::clone(&playback_service),
    ));
    let history_controller = Arc::new(HistoryController::new(Arc::clone(&pipeline.history)));
    let playback_controller = Arc::new(PlaybackController::new(playback_service));

    let router = build_router(
        conversion_controller,
        history_controller,
        playback_controller,
        Arc::clone(&pipeline.history_repo) as Arc<dyn HistoryRepository>,
    );

    (router, pipeline)
}
