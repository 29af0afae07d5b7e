use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::models::Entry;

/// Failure of a single access to the store file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read store file: {0}")]
    Read(#[source] std::io::Error),
    #[error("store file is not a valid entry array: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize entries: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write store file: {0}")]
    Write(#[source] std::io::Error),
}

impl StoreError {
    /// Whether the failure happened while persisting rather than loading
    pub fn is_write(&self) -> bool {
        matches!(self, StoreError::Serialize(_) | StoreError::Write(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Flat-file entry store shared by all handlers
///
/// Every operation reads the whole file, and every mutation rewrites it.
/// There is no locking: two concurrent writers may interleave their
/// read-modify-write cycles and one of the updates is lost.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: Arc<PathBuf>,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file contents verbatim
    ///
    /// A missing file reads as an empty array (`[]`).
    pub async fn read_raw(&self) -> Result<String> {
        match tokio::fs::read_to_string(self.path.as_path()).await {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("Store file {} does not exist yet", self.path.display());
                Ok("[]".to_string())
            }
            Err(err) => Err(StoreError::Read(err)),
        }
    }

    /// Load all entries in insertion order
    pub async fn load(&self) -> Result<Vec<Entry>> {
        let data = self.read_raw().await?;
        serde_json::from_str(&data).map_err(StoreError::Parse)
    }

    /// Replace the file contents with `entries`, pretty-printed with two-space indentation
    pub async fn save(&self, entries: &[Entry]) -> Result<()> {
        let data = serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)?;

        tokio::fs::write(self.path.as_path(), data)
            .await
            .map_err(StoreError::Write)?;

        tracing::debug!("Wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    /// First entry whose slug equals `slug`
    pub async fn find(&self, slug: &str) -> Result<Option<Entry>> {
        let entries = self.load().await?;
        Ok(entries.into_iter().find(|entry| entry.slug == slug))
    }

    /// Append `entry` without checking for an existing slug
    pub async fn append(&self, entry: Entry) -> Result<()> {
        let mut entries = self.load().await?;
        entries.push(entry);
        self.save(&entries).await
    }

    /// Remove the first entry whose slug equals `slug`
    ///
    /// Returns `false`, and leaves the file untouched, when no entry matches.
    pub async fn remove(&self, slug: &str) -> Result<bool> {
        let mut entries = self.load().await?;

        match entries.iter().position(|entry| entry.slug == slug) {
            Some(index) => {
                entries.remove(index);
                self.save(&entries).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
