//! Application layer logic for taskflow.
//!
//! This crate wires the domain types from `taskflow-core` into use cases, a
//! repository abstraction, storage ports and the [`TaskApplicationService`]
//! façade that UI layers call into.

pub mod config;
pub mod error;
pub mod ports;
pub mod report;
pub mod repository;
pub mod service;
pub mod use_cases;

// Re-exports for convenience
pub use config::{ProjectConfig, StorageConfig};
pub use error::{TaskError, TaskResult};
pub use ports::{IdGenerator, StoragePort, UuidIdGenerator};
pub use report::OperationReport;
pub use repository::{InMemoryTaskRepository, RepositoryError, TaskRepository};
pub use service::TaskApplicationService;
pub use use_cases::{
    AddTask, ClearAllTasks, EditTask, FilterTasks, GetTasksState, HydrateTasks, RemoveTask, TasksState,
    ToggleTask,
};
