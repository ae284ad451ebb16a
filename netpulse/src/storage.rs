//! Durable history storage

use crate::error::StorageError;
use async_trait::async_trait;
use netpulse_core::SpeedResult;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed file name the history is persisted under
pub const HISTORY_FILE_NAME: &str = "netpulse-history.json";

/// Seam over durable history storage
#[async_trait]
pub trait HistoryStorage: Send + Sync + fmt::Debug {
    /// Load the persisted history, oldest first. Absent data loads as
    /// an empty history.
    async fn load(&self) -> Result<Vec<SpeedResult>, StorageError>;

    /// Replace the persisted history with `entries`
    async fn save(&self, entries: &[SpeedResult]) -> Result<(), StorageError>;
}

/// History storage writing one JSON file under a fixed name
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Store the history as [`HISTORY_FILE_NAME`] inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(HISTORY_FILE_NAME),
        }
    }

    /// Full path of the history file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryStorage for JsonFileStorage {
    async fn load(&self) -> Result<Vec<SpeedResult>, StorageError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No history file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(StorageError::Io { source: err }),
        };
        serde_json::from_slice(&raw).map_err(|err| StorageError::Format {
            reason: err.to_string(),
        })
    }

    async fn save(&self, entries: &[SpeedResult]) -> Result<(), StorageError> {
        let raw = serde_json::to_vec_pretty(entries).map_err(|err| StorageError::Format {
            reason: err.to_string(),
        })?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, raw).await?;
        debug!(
            "Persisted {} samples to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}
