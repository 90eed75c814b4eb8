use async_trait::async_trait;
use std::path::PathBuf;

/// Durable medium for the history log.
///
/// Holds one serialized ordered sequence of strings under a fixed name:
/// read once at startup, overwritten wholesale on each mutation. Either the
/// whole write lands or the previous contents stay intact.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn load(&self) -> Result<Vec<String>, String>;

    /// Persist the full sequence, replacing whatever was stored before
    async fn save(&self, entries: &[String]) -> Result<(), String>;
}

/// JSON-file-backed implementation: the whole log is one JSON array of
/// strings at a fixed path.
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.as_os_str().to_owned();
        temp.push(".tmp");
        PathBuf::from(temp)
    }
}

#[async_trait]
impl HistoryRepository for FileHistoryRepository {
    async fn load(&self) -> Result<Vec<String>, String> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| format!("failed to read {}: {}", self.path.display(), e))?;

        serde_json::from_str(&data)
            .map_err(|e| format!("failed to parse {}: {}", self.path.display(), e))
    }

    async fn save(&self, entries: &[String]) -> Result<(), String> {
        let data = serde_json::to_string_pretty(entries)
            .map_err(|e| format!("failed to serialize history: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| format!("failed to create {}: {}", parent.display(), e))?;
            }
        }

        // write-then-rename so a crash mid-write cannot truncate the log
        let temp = self.temp_path();
        tokio::fs::write(&temp, data)
            .await
            .map_err(|e| format!("failed to write {}: {}", temp.display(), e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| format!("failed to replace {}: {}", self.path.display(), e))?;

        Ok(())
    }
}
