//! File-backed key-value storage for taskflow task snapshots.

mod error;

pub use error::FileStoreError;

use serde_json::Value;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use taskflow_core::{StoredTasks, TaskRecord};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Result alias for file store operations.
pub type Result<T> = std::result::Result<T, FileStoreError>;

/// Storage keeping one JSON snapshot per key at `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    version: u32,
}

impl FileStore {
    /// Store writing to `path`, stamping snapshots with `version`.
    ///
    /// Nothing touches the filesystem until the first operation.
    pub fn new(path: impl Into<PathBuf>, version: u32) -> Self {
        Self {
            path: path.into(),
            version,
        }
    }

    /// Store for `key` inside `dir`.
    pub fn for_key(dir: impl AsRef<Path>, key: &str, version: u32) -> Self {
        Self::new(dir.as_ref().join(format!("{key}.json")), version)
    }

    /// Location of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Schema version stamped on saved snapshots.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Read the snapshot, if one has been saved.
    ///
    /// A missing file and a file holding JSON `null` both read as `None`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(&self) -> Result<Option<StoredTasks>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot stored yet");
                return Ok(None);
            }
            Err(err) => return Err(FileStoreError::io(&self.path, err)),
        };

        let value: Value = serde_json::from_str(&contents).map_err(|source| FileStoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        if value.is_null() {
            return Ok(None);
        }

        let stored = StoredTasks::from_value(value).map_err(|source| FileStoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        if let Some(found) = stored.version()
            && found != self.version
        {
            warn!(path = %self.path.display(), found, expected = self.version, "Snapshot version differs");
        }
        debug!(path = %self.path.display(), "Loaded snapshot");
        Ok(Some(stored))
    }

    /// Replace the snapshot with `tasks`.
    ///
    /// The envelope is written to a temporary file in the same directory and
    /// renamed over the previous snapshot, so readers never see a torn write.
    ///
    /// # Errors
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save(&self, tasks: &[TaskRecord]) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|err| FileStoreError::io(dir, err))?;

        let body = serde_json::to_vec_pretty(&StoredTasks::envelope(tasks.to_vec(), self.version))?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(|err| FileStoreError::io(dir, err))?;
        tmp.write_all(&body)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|err| FileStoreError::io(tmp.path(), err))?;
        tmp.persist(&self.path).map_err(|source| FileStoreError::Persist {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), count = tasks.len(), "Saved snapshot");
        Ok(())
    }

    /// Delete the snapshot. Clearing an absent snapshot is a no-op.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Cleared snapshot");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(FileStoreError::io(&self.path, err)),
        }
    }

    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}
