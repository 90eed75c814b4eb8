pub mod history_repository;
pub mod openai_summarizer_repository;
pub mod polly_tts_repository;
pub mod summarizer_repository;
pub mod tts_repository;

pub use history_repository::{FileHistoryRepository, HistoryRepository};
pub use openai_summarizer_repository::OpenAiSummarizerRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use summarizer_repository::SummarizerRepository;
pub use tts_repository::TtsRepository;
