//! Capabilities the application service consumes from the outside world.

use anyhow::Error;
use std::sync::Arc;
use taskflow_core::{StoredTasks, TaskId, TaskRecord};
use taskflow_store_fs::{FileStore, FileStoreError};

/// Persistence of task snapshots.
pub trait StoragePort {
    /// Error type bubbled up from the backing store.
    type Error: Into<Error>;

    /// Read the last saved snapshot, `None` when nothing was saved.
    ///
    /// # Errors
    /// Returns a store-specific error when the snapshot cannot be read.
    fn load(&self) -> Result<Option<StoredTasks>, Self::Error>;

    /// Replace the saved snapshot with `tasks`.
    ///
    /// # Errors
    /// Returns a store-specific error when the snapshot cannot be written.
    fn save(&self, tasks: &[TaskRecord]) -> Result<(), Self::Error>;

    /// Forget the saved snapshot.
    ///
    /// # Errors
    /// Returns a store-specific error when the snapshot cannot be removed.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// Source of task identifiers, unique for the lifetime of the application.
pub trait IdGenerator {
    /// Produce a fresh identifier.
    fn generate(&self) -> String;
}

/// Generator emitting UUID v7 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        TaskId::generate().to_string()
    }
}

impl StoragePort for FileStore {
    type Error = FileStoreError;

    fn load(&self) -> Result<Option<StoredTasks>, Self::Error> {
        Self::load(self)
    }

    fn save(&self, tasks: &[TaskRecord]) -> Result<(), Self::Error> {
        Self::save(self, tasks)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        Self::clear(self)
    }
}

impl<S> StoragePort for Arc<S>
where
    S: StoragePort + ?Sized,
{
    type Error = S::Error;

    fn load(&self) -> Result<Option<StoredTasks>, Self::Error> {
        (**self).load()
    }

    fn save(&self, tasks: &[TaskRecord]) -> Result<(), Self::Error> {
        (**self).save(tasks)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        (**self).clear()
    }
}

impl<G> IdGenerator for Arc<G>
where
    G: IdGenerator + ?Sized,
{
    fn generate(&self) -> String {
        (**self).generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_generator_yields_unique_ids() {
        let generator = UuidIdGenerator;
        let ids: HashSet<_> = (0..64).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn file_store_satisfies_the_port() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::with_prefix("taskflow-port-test-")?;
        let store: Arc<FileStore> = Arc::new(FileStore::for_key(dir.path(), "taskflow", 1));

        assert!(StoragePort::load(&store).map_err(Error::from)?.is_none());
        let record = taskflow_core::Task::new(TaskId::from("a"), "Buy milk").to_record();
        StoragePort::save(&store, std::slice::from_ref(&record)).map_err(Error::from)?;
        let loaded = StoragePort::load(&store).map_err(Error::from)?;
        assert_eq!(loaded.and_then(StoredTasks::into_tasks), Some(vec![record]));
        StoragePort::clear(&store).map_err(Error::from)?;
        Ok(())
    }
}
