pub mod error;
pub mod service;

pub use error::PlaybackServiceError;
pub use service::{PlaybackService, MAX_PLAYBACK_RATE, MIN_PLAYBACK_RATE};
