//! Error types for taskflow file store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during `FileStore` operations.
#[derive(Error, Debug)]
pub enum FileStoreError {
    /// Reading, writing or removing the snapshot file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Snapshot file involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not valid JSON or holds malformed records.
    #[error("Failed to parse snapshot {path}: {source}")]
    Parse {
        /// Snapshot file involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be serialized.
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The temporary file could not be moved over the snapshot.
    #[error("Failed to replace snapshot {path}: {source}")]
    Persist {
        /// Snapshot file involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: tempfile::PersistError,
    },
}

impl FileStoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
