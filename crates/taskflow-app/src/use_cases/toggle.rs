use taskflow_core::{Task, TaskId};
use tracing::debug;

use super::wrap_failure;
use crate::error::{TaskError, TaskResult};
use crate::repository::TaskRepository;

/// Flip the completion flag of a task.
pub struct ToggleTask<R> {
    repository: R,
}

impl<R> ToggleTask<R>
where
    R: TaskRepository,
{
    /// Construct the use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Toggle the task with `id`, returning its new state.
    ///
    /// # Errors
    /// [`TaskError::NotFound`] for unknown ids, [`TaskError::NotToggleable`] when
    /// the repository fails.
    pub fn execute(&self, id: &TaskId) -> TaskResult<Task> {
        let fail = wrap_failure::<R::Error>(TaskError::NotToggleable);
        let task = self
            .repository
            .find_by_id(id)
            .map_err(&fail)?
            .ok_or_else(|| TaskError::NotFound(id.clone()))?;

        let toggled = task.toggle();
        self.repository.update(toggled.clone()).map_err(&fail)?;
        debug!(%id, done = toggled.is_done(), "Toggled task");
        Ok(toggled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryTaskRepository;
    use crate::use_cases::testing::BrokenRepository;
    use taskflow_core::ErrorCode;

    fn seeded() -> (InMemoryTaskRepository, Task) {
        let task = Task::new(TaskId::from("id-1"), "Tarefa").with_created_at(10);
        (InMemoryTaskRepository::with_tasks(vec![task.clone()]), task)
    }

    fn stored(repo: &InMemoryTaskRepository, id: &TaskId) -> Task {
        repo.find_by_id(id)
            .unwrap_or_else(|err| panic!("repository read: {err}"))
            .unwrap_or_else(|| panic!("task {id} must exist"))
    }

    #[test]
    fn toggles_pending_to_done() {
        let (repo, task) = seeded();
        let use_case = ToggleTask::new(&repo);
        let toggled = use_case.execute(task.id()).unwrap_or_else(|err| panic!("toggle: {err}"));
        assert!(toggled.is_done());
        assert!(stored(&repo, task.id()).is_done());
    }

    #[test]
    fn toggling_twice_restores_the_task() {
        let (repo, task) = seeded();
        let use_case = ToggleTask::new(&repo);
        for _ in 0..2 {
            use_case.execute(task.id()).unwrap_or_else(|err| panic!("toggle: {err}"));
        }
        assert_eq!(stored(&repo, task.id()), task);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (repo, _) = seeded();
        let err = ToggleTask::new(&repo)
            .execute(&TaskId::from("id-inexistente"))
            .err()
            .unwrap_or_else(|| panic!("must fail"));
        assert_eq!(err.code(), ErrorCode::TaskNotFound);
    }

    #[test]
    fn backend_failures_become_not_toggleable() {
        let err = ToggleTask::new(BrokenRepository)
            .execute(&TaskId::from("id-1"))
            .err()
            .unwrap_or_else(|| panic!("must fail"));
        assert_eq!(err.code(), ErrorCode::TaskNotToggleable);
    }
}
