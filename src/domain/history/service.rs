use super::error::HistoryServiceError;
use super::HistoryEntry;
use crate::infrastructure::repositories::HistoryRepository;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Durable ordered log of submitted texts.
///
/// Every mutation persists the FULL updated sequence before the in-memory
/// commit, so the two views never diverge observably: a failed persist
/// leaves both untouched. The mutex serializes writers; concurrent
/// mutations cannot lose updates.
pub struct HistoryService {
    history_repo: Arc<dyn HistoryRepository>,
    entries: Mutex<Vec<String>>,
}

impl HistoryService {
    /// Read the durable state, once, at startup.
    pub async fn load(
        history_repo: Arc<dyn HistoryRepository>,
    ) -> Result<Self, HistoryServiceError> {
        let entries = history_repo
            .load()
            .await
            .map_err(HistoryServiceError::Persistence)?;

        tracing::info!(entry_count = entries.len(), "history loaded");

        Ok(Self {
            history_repo,
            entries: Mutex::new(entries),
        })
    }

    /// Append a text at the end of the log, assigning the next position.
    pub async fn append(&self, text: String) -> Result<Vec<HistoryEntry>, HistoryServiceError> {
        let mut entries = self.entries.lock().await;

        let mut updated = entries.clone();
        updated.push(text);

        self.history_repo
            .save(&updated)
            .await
            .map_err(HistoryServiceError::Persistence)?;
        *entries = updated;

        tracing::info!(entry_count = entries.len(), "history entry appended");

        Ok(Self::to_entries(&entries))
    }

    /// Remove exactly one entry; positions of the entries after it shift
    /// down by one. Positions are view indices, not stable identifiers.
    pub async fn remove_at(
        &self,
        position: usize,
    ) -> Result<Vec<HistoryEntry>, HistoryServiceError> {
        let mut entries = self.entries.lock().await;

        if position >= entries.len() {
            return Err(HistoryServiceError::OutOfRange {
                position,
                len: entries.len(),
            });
        }

        let mut updated = entries.clone();
        updated.remove(position);

        self.history_repo
            .save(&updated)
            .await
            .map_err(HistoryServiceError::Persistence)?;
        *entries = updated;

        tracing::info!(
            position,
            entry_count = entries.len(),
            "history entry removed"
        );

        Ok(Self::to_entries(&entries))
    }

    /// Current ordered view of the log.
    pub async fn entries(&self) -> Vec<HistoryEntry> {
        Self::to_entries(&self.entries.lock().await)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    fn to_entries(texts: &[String]) -> Vec<HistoryEntry> {
        texts
            .iter()
            .enumerate()
            .map(|(position, text)| HistoryEntry {
                position,
                text: text.clone(),
            })
            .collect()
    }
}
