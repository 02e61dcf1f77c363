//! Snapshot codec and file store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Snapshot persistence error.
///
/// Recoverable: callers log and continue with whatever state they have.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot codec failed: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Serialize a record snapshot to JSON bytes.
pub fn to_bytes<T: Serialize>(items: &[T]) -> Result<Vec<u8>, PersistError> {
    Ok(serde_json::to_vec_pretty(items)?)
}

/// Restore a record snapshot from JSON bytes.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, PersistError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// File-backed JSON snapshot store.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full snapshot, replacing any previous content.
    pub fn save<T: Serialize>(&self, items: &[T]) -> Result<(), PersistError> {
        let bytes = to_bytes(items)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    /// Load the full snapshot.
    ///
    /// A missing file is an error here; see [`SnapshotFile::load_or_default`]
    /// for the start-empty variant.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, PersistError> {
        let bytes = fs::read(&self.path)?;
        from_bytes(&bytes)
    }

    /// Load the snapshot, treating a missing file as an empty one.
    pub fn load_or_default<T: DeserializeOwned>(&self) -> Result<Vec<T>, PersistError> {
        match fs::read(&self.path) {
            Ok(bytes) => from_bytes(&bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.path.display(),
                    "snapshot file not found, starting empty"
                );
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }
}
