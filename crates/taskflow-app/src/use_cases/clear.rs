use tracing::debug;

use super::wrap_failure;
use crate::error::{TaskError, TaskResult};
use crate::repository::TaskRepository;

/// Delete every task.
pub struct ClearAllTasks<R> {
    repository: R,
}

impl<R> ClearAllTasks<R>
where
    R: TaskRepository,
{
    /// Construct the use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Empty the repository.
    ///
    /// # Errors
    /// [`TaskError::NotClearable`] when the repository fails.
    pub fn execute(&self) -> TaskResult<()> {
        self.repository
            .clear()
            .map_err(wrap_failure::<R::Error>(TaskError::NotClearable))?;
        debug!("Cleared all tasks");
        Ok(())
    }
}
