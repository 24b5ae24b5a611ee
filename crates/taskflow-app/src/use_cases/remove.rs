use taskflow_core::{Task, TaskId};
use tracing::debug;

use super::wrap_failure;
use crate::error::{TaskError, TaskResult};
use crate::repository::TaskRepository;

/// Delete a task from the collection.
pub struct RemoveTask<R> {
    repository: R,
}

impl<R> RemoveTask<R>
where
    R: TaskRepository,
{
    /// Construct the use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Remove the task with `id`, returning the removed task.
    ///
    /// # Errors
    /// [`TaskError::NotFound`] for unknown ids, [`TaskError::NotDeletable`] when
    /// the repository fails.
    pub fn execute(&self, id: &TaskId) -> TaskResult<Task> {
        let fail = wrap_failure::<R::Error>(TaskError::NotDeletable);
        let task = self
            .repository
            .find_by_id(id)
            .map_err(&fail)?
            .ok_or_else(|| TaskError::NotFound(id.clone()))?;

        self.repository.remove(id).map_err(&fail)?;
        debug!(%id, "Removed task");
        Ok(task)
    }
}
