use taskflow_core::{Task, TaskId, TaskTitle};
use tracing::debug;

use super::wrap_failure;
use crate::error::{TaskError, TaskResult};
use crate::repository::TaskRepository;

/// Rename a task.
pub struct EditTask<R> {
    repository: R,
}

impl<R> EditTask<R>
where
    R: TaskRepository,
{
    /// Construct the use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Give the task with `id` the title `raw_new_title`.
    ///
    /// A title equal to the current one ignoring case leaves the task untouched
    /// and succeeds. The returned task reflects what is stored afterwards.
    ///
    /// # Errors
    /// [`TaskError::NotFound`] for unknown ids, [`TaskError::Empty`] for blank
    /// titles, [`TaskError::Duplicate`] when a different task already has the
    /// title, [`TaskError::NotEditable`] when the repository fails.
    pub fn execute(&self, id: &TaskId, raw_new_title: &str) -> TaskResult<Task> {
        let fail = wrap_failure::<R::Error>(TaskError::NotEditable);
        let task = self
            .repository
            .find_by_id(id)
            .map_err(&fail)?
            .ok_or_else(|| TaskError::NotFound(id.clone()))?;

        let title = TaskTitle::new(raw_new_title)?;
        if title.equals_raw(task.title()) {
            debug!(%id, "Title unchanged");
            return Ok(task);
        }

        if self
            .repository
            .find_by_title(title.as_str(), Some(id))
            .map_err(&fail)?
            .is_some()
        {
            return Err(TaskError::Duplicate);
        }

        let updated = task.update_title(title);
        self.repository.update(updated.clone()).map_err(&fail)?;
        debug!(%id, title = updated.title(), "Edited task");
        Ok(updated)
    }
}
