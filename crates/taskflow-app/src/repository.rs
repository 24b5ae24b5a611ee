//! Authoritative task collection behind a capability trait.

use anyhow::Error;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use taskflow_core::{Task, TaskId, TaskTitle};
use tracing::debug;

/// Storage capability required by the use cases.
///
/// Implementations are dumb stores: they never validate titles or enforce
/// uniqueness. Every returned [`Task`] is an independent copy, so nothing a
/// caller does with it can reach the stored state.
pub trait TaskRepository {
    /// Error type bubbled up from the backing store.
    type Error: Into<Error>;

    /// Snapshot of every task, most recent first.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be read.
    fn get_all(&self) -> Result<Vec<Task>, Self::Error>;

    /// Look a task up by identifier.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be read.
    fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, Self::Error>;

    /// First task whose title equals `title` ignoring case, skipping `exclude`.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be read.
    fn find_by_title(&self, title: &str, exclude: Option<&TaskId>) -> Result<Option<Task>, Self::Error>;

    /// Insert `task` at the head of the collection.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be written.
    fn add(&self, task: Task) -> Result<(), Self::Error>;

    /// Replace the task sharing `task`'s identifier. Absent tasks are ignored.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be written.
    fn update(&self, task: Task) -> Result<(), Self::Error>;

    /// Delete the task with `id`. Absent tasks are ignored.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be written.
    fn remove(&self, id: &TaskId) -> Result<(), Self::Error>;

    /// Empty the collection.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be written.
    fn clear(&self) -> Result<(), Self::Error>;

    /// Replace the whole collection, keeping the given order.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be written.
    fn hydrate(&self, tasks: Vec<Task>) -> Result<(), Self::Error>;
}

/// Failures of [`InMemoryTaskRepository`].
#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    /// A previous holder of the lock panicked.
    #[error("task collection lock poisoned")]
    Poisoned,
}

/// Repository keeping tasks in process memory.
///
/// Each call takes the lock on its own. Use cases check title uniqueness and
/// then write in separate calls, so uniqueness holds only while calls are not
/// overlapped across threads.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Task>>, RepositoryError> {
        self.tasks.read().map_err(|_| RepositoryError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Task>>, RepositoryError> {
        self.tasks.write().map_err(|_| RepositoryError::Poisoned)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    type Error = RepositoryError;

    fn get_all(&self) -> Result<Vec<Task>, Self::Error> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, Self::Error> {
        Ok(self.read()?.iter().find(|task| task.id() == id).cloned())
    }

    fn find_by_title(&self, title: &str, exclude: Option<&TaskId>) -> Result<Option<Task>, Self::Error> {
        let needle = TaskTitle::fold(title);
        Ok(self
            .read()?
            .iter()
            .find(|task| TaskTitle::fold(task.title()) == needle && exclude != Some(task.id()))
            .cloned())
    }

    fn add(&self, task: Task) -> Result<(), Self::Error> {
        self.write()?.insert(0, task);
        Ok(())
    }

    fn update(&self, task: Task) -> Result<(), Self::Error> {
        let mut tasks = self.write()?;
        if let Some(slot) = tasks.iter_mut().find(|existing| existing.id() == task.id()) {
            *slot = task;
        } else {
            debug!(id = %task.id(), "Ignoring update of unknown task");
        }
        Ok(())
    }

    fn remove(&self, id: &TaskId) -> Result<(), Self::Error> {
        self.write()?.retain(|task| task.id() != id);
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        self.write()?.clear();
        Ok(())
    }

    fn hydrate(&self, tasks: Vec<Task>) -> Result<(), Self::Error> {
        *self.write()? = tasks;
        Ok(())
    }
}

impl<R> TaskRepository for &R
where
    R: TaskRepository + ?Sized,
{
    type Error = R::Error;

    fn get_all(&self) -> Result<Vec<Task>, Self::Error> {
        (*self).get_all()
    }

    fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, Self::Error> {
        (*self).find_by_id(id)
    }

    fn find_by_title(&self, title: &str, exclude: Option<&TaskId>) -> Result<Option<Task>, Self::Error> {
        (*self).find_by_title(title, exclude)
    }

    fn add(&self, task: Task) -> Result<(), Self::Error> {
        (*self).add(task)
    }

    fn update(&self, task: Task) -> Result<(), Self::Error> {
        (*self).update(task)
    }

    fn remove(&self, id: &TaskId) -> Result<(), Self::Error> {
        (*self).remove(id)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        (*self).clear()
    }

    fn hydrate(&self, tasks: Vec<Task>) -> Result<(), Self::Error> {
        (*self).hydrate(tasks)
    }
}

impl<R> TaskRepository for Arc<R>
where
    R: TaskRepository + ?Sized,
{
    type Error = R::Error;

    fn get_all(&self) -> Result<Vec<Task>, Self::Error> {
        (**self).get_all()
    }

    fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, Self::Error> {
        (**self).find_by_id(id)
    }

    fn find_by_title(&self, title: &str, exclude: Option<&TaskId>) -> Result<Option<Task>, Self::Error> {
        (**self).find_by_title(title, exclude)
    }

    fn add(&self, task: Task) -> Result<(), Self::Error> {
        (**self).add(task)
    }

    fn update(&self, task: Task) -> Result<(), Self::Error> {
        (**self).update(task)
    }

    fn remove(&self, id: &TaskId) -> Result<(), Self::Error> {
        (**self).remove(id)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        (**self).clear()
    }

    fn hydrate(&self, tasks: Vec<Task>) -> Result<(), Self::Error> {
        (**self).hydrate(tasks)
    }
}
