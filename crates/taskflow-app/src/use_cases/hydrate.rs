use taskflow_core::{Task, TaskRecord};
use tracing::info;

use super::wrap_failure;
use crate::error::{TaskError, TaskResult};
use crate::repository::TaskRepository;

/// Replace the collection with a persisted snapshot.
pub struct HydrateTasks<R> {
    repository: R,
}

impl<R> HydrateTasks<R>
where
    R: TaskRepository,
{
    /// Construct the use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Load `tasks` into the repository, returning how many were loaded.
    ///
    /// `None` stands for a snapshot without a task array and empties the
    /// repository. Records are taken as-is; duplicate titles inside a snapshot
    /// are not rejected.
    ///
    /// # Errors
    /// [`TaskError::NotHydratable`] when the repository fails.
    pub fn execute(&self, tasks: Option<Vec<TaskRecord>>) -> TaskResult<usize> {
        let tasks: Vec<Task> = tasks.unwrap_or_default().into_iter().map(Task::from).collect();
        let count = tasks.len();
        self.repository
            .hydrate(tasks)
            .map_err(wrap_failure::<R::Error>(TaskError::NotHydratable))?;
        info!(count, "Hydrated tasks");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryTaskRepository;
    use crate::use_cases::testing::BrokenRepository;
    use taskflow_core::{ErrorCode, TaskId};

    fn record(id: &str, title: &str, done: bool) -> TaskRecord {
        TaskRecord {
            id: TaskId::from(id),
            title: title.into(),
            done,
            created_at: 100,
        }
    }

    #[test]
    fn replaces_the_collection_in_order() {
        let repo = InMemoryTaskRepository::with_tasks(vec![Task::new(TaskId::from("old"), "Old")]);
        let count = HydrateTasks::new(&repo)
            .execute(Some(vec![record("a", "One", true), record("b", "Two", false)]))
            .unwrap_or_else(|err| panic!("hydrate: {err}"));
        assert_eq!(count, 2);

        let tasks = repo.get_all().unwrap_or_else(|err| panic!("read: {err}"));
        let ids: Vec<_> = tasks.iter().map(|t| t.id().to_string()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(tasks[0].is_done());
        assert_eq!(tasks[0].created_at(), 100);
    }

    #[test]
    fn missing_array_empties_the_repository() {
        let repo = InMemoryTaskRepository::with_tasks(vec![Task::new(TaskId::from("old"), "Old")]);
        let count = HydrateTasks::new(&repo)
            .execute(None)
            .unwrap_or_else(|err| panic!("hydrate: {err}"));
        assert_eq!(count, 0);
        assert!(repo.get_all().unwrap_or_else(|err| panic!("read: {err}")).is_empty());
    }

    #[test]
    fn backend_failures_become_not_hydratable() {
        let err = HydrateTasks::new(BrokenRepository)
            .execute(Some(vec![record("a", "One", false)]))
            .err()
            .unwrap_or_else(|| panic!("must fail"));
        assert_eq!(err.code(), ErrorCode::TaskNotHydratable);
    }
}
