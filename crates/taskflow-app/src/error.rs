//! Failure type returned by every use case.

use anyhow::Error;
use taskflow_core::{ErrorCode, TaskId, TaskTitleError};

/// Result alias for task operations.
pub type TaskResult<T> = Result<T, TaskError>;

/// Errors surfaced by the use cases and the application service.
///
/// Expected rejections (`Empty`, `Duplicate`, `NotFound`) carry no source. The
/// remaining variants wrap whatever a repository or storage backend reported
/// while the named operation was running.
#[derive(thiserror::Error, Debug)]
pub enum TaskError {
    /// Title is blank after normalization.
    #[error("Task title cannot be empty")]
    Empty,
    /// Another task already has this title.
    #[error("Task already exists")]
    Duplicate,
    /// No task has this identifier.
    #[error("Task not found: {0}")]
    NotFound(TaskId),
    /// Adding failed unexpectedly.
    #[error("{0}")]
    NotAddable(#[source] Error),
    /// Toggling failed unexpectedly.
    #[error("{0}")]
    NotToggleable(#[source] Error),
    /// Removing failed unexpectedly.
    #[error("{0}")]
    NotDeletable(#[source] Error),
    /// Editing failed unexpectedly.
    #[error("{0}")]
    NotEditable(#[source] Error),
    /// Clearing failed unexpectedly.
    #[error("{0}")]
    NotClearable(#[source] Error),
    /// Hydrating failed unexpectedly.
    #[error("{0}")]
    NotHydratable(#[source] Error),
    /// Storage backend failed.
    #[error("{0}")]
    Storage(#[source] Error),
}

impl TaskError {
    /// Code reported to callers for this failure.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Empty => ErrorCode::TaskEmpty,
            Self::Duplicate => ErrorCode::TaskDuplicate,
            Self::NotFound(_) => ErrorCode::TaskNotFound,
            Self::NotAddable(_) => ErrorCode::TaskNotAddable,
            Self::NotToggleable(_) => ErrorCode::TaskNotToggleable,
            Self::NotDeletable(_) => ErrorCode::TaskNotDeletable,
            Self::NotEditable(_) => ErrorCode::TaskNotEditable,
            Self::NotClearable(_) => ErrorCode::TaskNotClearable,
            Self::NotHydratable(_) => ErrorCode::TaskNotHydratable,
            Self::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// Whether this is an expected rejection rather than a backend failure.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Empty | Self::Duplicate | Self::NotFound(_))
    }
}

impl From<TaskTitleError> for TaskError {
    fn from(err: TaskTitleError) -> Self {
        match err {
            TaskTitleError::Empty => Self::Empty,
        }
    }
}
