//! File-backed mood log.
//!
//! The whole log is one pretty-printed JSON array. Every append reads the array,
//! pushes one entry and rewrites the file via temp file + rename. Appends within
//! one process are serialized by a mutex; separate processes writing the same
//! file can still lose updates.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::mood::LogEntry;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Read path: file missing or unparseable.
    #[error("{0}")]
    Unavailable(String),

    /// Write path: existing content is not a JSON array of entries.
    #[error("corrupt mood log: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("mood log I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode mood log: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Clone)]
pub struct MoodLogStore {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl MoodLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry and returns the new entry count.
    ///
    /// Creates the file with a single-element array if it does not exist. A corrupt
    /// existing file is left untouched and reported as [`StoreError::Corrupt`].
    pub async fn append(&self, entry: LogEntry) -> StoreResult<usize> {
        let _guard = self.write_lock.lock().await;

        let mut entries = match tokio::fs::read_to_string(self.path.as_path()).await {
            Ok(raw) => serde_json::from_str::<Vec<LogEntry>>(&raw).map_err(StoreError::Corrupt)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        entries.push(entry);
        let json = serde_json::to_string_pretty(&entries).map_err(StoreError::Encode)?;
        atomic_write(&self.path, json.as_bytes()).await?;

        tracing::debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Mood log entry appended"
        );

        Ok(entries.len())
    }

    /// Reads every entry in append order.
    pub async fn read_all(&self) -> StoreResult<Vec<LogEntry>> {
        let raw = tokio::fs::read_to_string(self.path.as_path())
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        serde_json::from_str(&raw).map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    /// Whether the log file exists and parses. `Ok(false)` means no file yet.
    pub async fn probe(&self) -> StoreResult<bool> {
        match tokio::fs::try_exists(self.path.as_path()).await? {
            false => Ok(false),
            true => self.read_all().await.map(|_| true),
        }
    }
}

/// Write data atomically using temp file + rename
async fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, data).await?;
    tokio::fs::rename(&temp_path, path).await
}
