pub mod error;
pub mod service;

pub use error::HistoryServiceError;
pub use service::HistoryService;

use serde::{Deserialize, Serialize};

/// One durably recorded past input, addressed by its view position.
///
/// Entries are immutable once created; only whole-entry append and
/// whole-entry removal exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub position: usize,
    pub text: String,
}
