use anyhow::Result;
use serde::Serialize;
use taskflow_core::{TaskRecord, TaskStats};

use crate::repository::TaskRepository;

/// Plain view of the collection handed to renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TasksState {
    /// Records, most recent first.
    pub tasks: Vec<TaskRecord>,
    /// Counters over `tasks`.
    pub stats: TaskStats,
}

/// Read the collection together with its completion counters.
pub struct GetTasksState<R> {
    repository: R,
}

impl<R> GetTasksState<R>
where
    R: TaskRepository,
{
    /// Construct the use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Snapshot every task as a plain record and count them.
    ///
    /// # Errors
    /// Propagates a repository read failure. The in-memory repository never
    /// fails here.
    pub fn execute(&self) -> Result<TasksState> {
        let tasks: Vec<TaskRecord> = self
            .repository
            .get_all()
            .map_err(Into::<anyhow::Error>::into)?
            .into_iter()
            .map(TaskRecord::from)
            .collect();
        let stats = TaskStats::of_records(&tasks);
        Ok(TasksState { tasks, stats })
    }
}
