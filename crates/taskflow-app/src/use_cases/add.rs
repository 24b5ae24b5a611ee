use taskflow_core::{Task, TaskId, TaskTitle};
use tracing::debug;

use super::wrap_failure;
use crate::error::{TaskError, TaskResult};
use crate::ports::IdGenerator;
use crate::repository::TaskRepository;

/// Create a pending task from a raw title.
pub struct AddTask<R, G> {
    repository: R,
    id_generator: G,
}

impl<R, G> AddTask<R, G>
where
    R: TaskRepository,
    G: IdGenerator,
{
    /// Construct the use case.
    pub const fn new(repository: R, id_generator: G) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Validate `raw_title`, reject duplicates and insert the new task at the head.
    ///
    /// # Errors
    /// [`TaskError::Empty`] for blank titles, [`TaskError::Duplicate`] when another
    /// task has the same title ignoring case, [`TaskError::NotAddable`] when the
    /// repository fails.
    pub fn execute(&self, raw_title: &str) -> TaskResult<Task> {
        let title = TaskTitle::new(raw_title)?;
        let fail = wrap_failure::<R::Error>(TaskError::NotAddable);

        if self.repository.find_by_title(title.as_str(), None).map_err(&fail)?.is_some() {
            return Err(TaskError::Duplicate);
        }

        let task = Task::new(TaskId::new(self.id_generator.generate()), title);
        self.repository.add(task.clone()).map_err(&fail)?;
        debug!(id = %task.id(), title = task.title(), "Added task");
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryTaskRepository;
    use crate::use_cases::testing::{BrokenRepository, SequentialIds};
    use taskflow_core::ErrorCode;

    fn add_task() -> AddTask<InMemoryTaskRepository, SequentialIds> {
        AddTask::new(InMemoryTaskRepository::new(), SequentialIds::default())
    }

    fn added(use_case: &AddTask<InMemoryTaskRepository, SequentialIds>, raw: &str) -> Task {
        use_case
            .execute(raw)
            .unwrap_or_else(|err| panic!("adding {raw:?} must succeed: {err}"))
    }

    fn stored(use_case: &AddTask<InMemoryTaskRepository, SequentialIds>) -> Vec<Task> {
        use_case
            .repository
            .get_all()
            .unwrap_or_else(|err| panic!("repository read: {err}"))
    }

    #[test]
    fn adds_a_pending_task() {
        let use_case = add_task();
        let task = added(&use_case, "Minha tarefa");
        assert_eq!(task.title(), "Minha tarefa");
        assert!(!task.is_done());
        assert_eq!(task.id(), &TaskId::from("id-1"));
        assert_eq!(stored(&use_case), vec![task]);
    }

    #[test]
    fn normalizes_the_title() {
        let use_case = add_task();
        assert_eq!(added(&use_case, "  Minha   tarefa  ").title(), "Minha tarefa");
    }

    #[test]
    fn rejects_blank_titles_without_touching_the_repository() {
        let use_case = add_task();
        for raw in ["", "   ", "\t\n"] {
            let err = use_case.execute(raw).err().unwrap_or_else(|| panic!("{raw:?} must fail"));
            assert_eq!(err.code(), ErrorCode::TaskEmpty);
        }
        assert!(stored(&use_case).is_empty());
    }

    #[test]
    fn rejects_case_insensitive_duplicates() {
        let use_case = add_task();
        added(&use_case, "Tarefa A");
        for raw in ["Tarefa A", "tarefa a", "  TAREFA   a "] {
            let err = use_case.execute(raw).err().unwrap_or_else(|| panic!("{raw:?} must fail"));
            assert_eq!(err.code(), ErrorCode::TaskDuplicate);
        }
        assert_eq!(stored(&use_case).len(), 1);
    }

    #[test]
    fn newest_task_comes_first() {
        let use_case = add_task();
        added(&use_case, "Tarefa 1");
        added(&use_case, "Tarefa 2");
        let titles: Vec<_> = stored(&use_case).iter().map(|t| t.title().to_owned()).collect();
        assert_eq!(titles, vec!["Tarefa 2", "Tarefa 1"]);
    }

    #[test]
    fn backend_failures_become_not_addable() {
        let use_case = AddTask::new(BrokenRepository, SequentialIds::default());
        let err = use_case.execute("Tarefa").err().unwrap_or_else(|| panic!("must fail"));
        assert_eq!(err.code(), ErrorCode::TaskNotAddable);
        assert_eq!(err.to_string(), "backend unavailable");
    }

    #[test]
    fn blank_title_wins_over_backend_failure() {
        let use_case = AddTask::new(BrokenRepository, SequentialIds::default());
        let err = use_case.execute("  ").err().unwrap_or_else(|| panic!("must fail"));
        assert_eq!(err.code(), ErrorCode::TaskEmpty);
    }
}
