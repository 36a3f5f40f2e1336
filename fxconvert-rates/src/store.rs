//! On-disk cache for the last good rate document.
//!
//! The fetched XML is persisted as-is so the service can still build a
//! table after a restart when the remote source is unreachable.

use std::path::{Path, PathBuf};

use fxconvert_types::SourceError;

/// Stores the raw rate document at a fixed path.
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the document, creating parent directories as needed.
    pub async fn save(&self, document: &str) -> Result<(), SourceError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SourceError::Io(e.to_string()))?;
        }
        tokio::fs::write(&self.path, document)
            .await
            .map_err(|e| SourceError::Io(e.to_string()))
    }

    /// Reads the cached document back.
    pub async fn load(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Io(e.to_string()))
    }
}
