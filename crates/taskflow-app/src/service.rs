use anyhow::{Error, Result};
use std::sync::Arc;
use taskflow_core::{Task, TaskFilter, TaskId, TaskRecord};
use tracing::{debug, info, warn};

use crate::error::{TaskError, TaskResult};
use crate::ports::{IdGenerator, StoragePort};
use crate::repository::TaskRepository;
use crate::use_cases::{
    AddTask, ClearAllTasks, EditTask, FilterTasks, GetTasksState, HydrateTasks, RemoveTask, TasksState,
    ToggleTask,
};

/// Service façade composing every use case with a storage port.
///
/// This is the only object UI layers talk to. None of its methods panic on
/// expected failures; every outcome comes back as a value.
pub struct TaskApplicationService<R, G, S> {
    add: AddTask<Arc<R>, G>,
    toggle: ToggleTask<Arc<R>>,
    remove: RemoveTask<Arc<R>>,
    edit: EditTask<Arc<R>>,
    clear_all: ClearAllTasks<Arc<R>>,
    state: GetTasksState<Arc<R>>,
    filter: FilterTasks,
    hydrate: HydrateTasks<Arc<R>>,
    storage: S,
}

impl<R, G, S> TaskApplicationService<R, G, S>
where
    R: TaskRepository,
    G: IdGenerator,
    S: StoragePort,
{
    /// Wire the use cases around a shared repository.
    pub fn new(repository: Arc<R>, id_generator: G, storage: S) -> Self {
        Self {
            add: AddTask::new(Arc::clone(&repository), id_generator),
            toggle: ToggleTask::new(Arc::clone(&repository)),
            remove: RemoveTask::new(Arc::clone(&repository)),
            edit: EditTask::new(Arc::clone(&repository)),
            clear_all: ClearAllTasks::new(Arc::clone(&repository)),
            state: GetTasksState::new(Arc::clone(&repository)),
            filter: FilterTasks::new(),
            hydrate: HydrateTasks::new(repository),
            storage,
        }
    }

    /// Borrow the storage port.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Create a task from a raw title.
    ///
    /// # Errors
    /// See [`AddTask::execute`].
    pub fn add_task(&self, raw_title: &str) -> TaskResult<Task> {
        self.add.execute(raw_title)
    }

    /// Flip a task's completion flag.
    ///
    /// # Errors
    /// See [`ToggleTask::execute`].
    pub fn toggle_task(&self, id: &TaskId) -> TaskResult<Task> {
        self.toggle.execute(id)
    }

    /// Delete a task.
    ///
    /// # Errors
    /// See [`RemoveTask::execute`].
    pub fn remove_task(&self, id: &TaskId) -> TaskResult<Task> {
        self.remove.execute(id)
    }

    /// Rename a task.
    ///
    /// # Errors
    /// See [`EditTask::execute`].
    pub fn edit_task(&self, id: &TaskId, raw_new_title: &str) -> TaskResult<Task> {
        self.edit.execute(id, raw_new_title)
    }

    /// Delete every task.
    ///
    /// # Errors
    /// See [`ClearAllTasks::execute`].
    pub fn clear_all_tasks(&self) -> TaskResult<()> {
        self.clear_all.execute()
    }

    /// Plain records of every task plus completion counters.
    ///
    /// A pure read. With [`InMemoryTaskRepository`](crate::InMemoryTaskRepository)
    /// it only fails if a thread panicked while holding the collection lock.
    ///
    /// # Errors
    /// Propagates a repository read failure.
    pub fn get_state(&self) -> Result<TasksState> {
        self.state.execute()
    }

    /// Filter already fetched records by raw filter name and search text.
    #[must_use]
    pub fn filter_tasks(&self, tasks: &[TaskRecord], filter: &str, search: &str) -> Vec<TaskRecord> {
        self.filter.execute(tasks, filter, search)
    }

    /// Current state with `tasks` narrowed by `filter` and `search`.
    ///
    /// The counters keep describing the whole collection.
    ///
    /// # Errors
    /// Propagates a repository read failure.
    pub fn filtered_state(&self, filter: TaskFilter, search: &str) -> Result<TasksState> {
        let TasksState { tasks, stats } = self.get_state()?;
        Ok(TasksState {
            tasks: self.filter.apply(&tasks, filter, search),
            stats,
        })
    }

    /// Parse a raw filter name, defaulting to [`TaskFilter::All`].
    #[must_use]
    pub fn normalize_filter(&self, filter: &str) -> TaskFilter {
        self.filter.normalize_filter(filter)
    }

    /// Normalize raw search text.
    #[must_use]
    pub fn normalize_search(&self, search: &str) -> String {
        self.filter.normalize_search(search)
    }

    /// Hydrate the repository from the storage port.
    ///
    /// Succeeds without touching the repository when nothing was saved.
    ///
    /// # Errors
    /// [`TaskError::Storage`] when the port cannot load, otherwise see
    /// [`HydrateTasks::execute`].
    pub fn load_from_storage(&self) -> TaskResult<()> {
        let Some(stored) = self.storage.load().map_err(|err| storage_failure(err.into()))? else {
            debug!("No stored tasks to load");
            return Ok(());
        };
        self.hydrate.execute(stored.into_tasks()).map(|_| ())
    }

    /// Persist the current state through the storage port.
    ///
    /// # Errors
    /// [`TaskError::Storage`] when the state cannot be read or written.
    pub fn save_to_storage(&self) -> TaskResult<()> {
        let state = self.get_state().map_err(storage_failure)?;
        self.storage
            .save(&state.tasks)
            .map_err(|err| storage_failure(err.into()))?;
        info!(count = state.tasks.len(), "Saved tasks to storage");
        Ok(())
    }

    /// Forget the persisted snapshot. The in-memory collection is untouched.
    ///
    /// # Errors
    /// [`TaskError::Storage`] when the port cannot clear.
    pub fn clear_storage(&self) -> TaskResult<()> {
        self.storage.clear().map_err(|err| storage_failure(err.into()))?;
        info!("Cleared stored tasks");
        Ok(())
    }
}

fn storage_failure(err: Error) -> TaskError {
    warn!(error = %err, "Storage operation failed");
    TaskError::Storage(err)
}
