//! Error codes shared by every task operation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable, string-valued classification of a failed operation.
///
/// The serialized form (`TASK_EMPTY`, `STORAGE_ERROR`, ...) is what UI layers
/// branch on, so variants must never be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Title is blank after normalization.
    TaskEmpty,
    /// Title collides case-insensitively with another task.
    TaskDuplicate,
    /// Identifier does not resolve to a task.
    TaskNotFound,
    /// Unexpected failure while adding.
    TaskNotAddable,
    /// Unexpected failure while toggling.
    TaskNotToggleable,
    /// Unexpected failure while removing.
    TaskNotDeletable,
    /// Unexpected failure while editing.
    TaskNotEditable,
    /// Unexpected failure while clearing.
    TaskNotClearable,
    /// Unexpected failure while hydrating.
    TaskNotHydratable,
    /// Persistence failure.
    StorageError,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::TaskEmpty,
        Self::TaskDuplicate,
        Self::TaskNotFound,
        Self::TaskNotAddable,
        Self::TaskNotToggleable,
        Self::TaskNotDeletable,
        Self::TaskNotEditable,
        Self::TaskNotClearable,
        Self::TaskNotHydratable,
        Self::StorageError,
    ];

    /// String representation surfaced to callers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskEmpty => "TASK_EMPTY",
            Self::TaskDuplicate => "TASK_DUPLICATE",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::TaskNotAddable => "TASK_NOT_ADDABLE",
            Self::TaskNotToggleable => "TASK_NOT_TOGGLEABLE",
            Self::TaskNotDeletable => "TASK_NOT_DELETABLE",
            Self::TaskNotEditable => "TASK_NOT_EDITABLE",
            Self::TaskNotClearable => "TASK_NOT_CLEARABLE",
            Self::TaskNotHydratable => "TASK_NOT_HYDRATABLE",
            Self::StorageError => "STORAGE_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection raised while building a [`crate::title::TaskTitle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskTitleError {
    /// Nothing is left after trimming and collapsing whitespace.
    #[error("Task title cannot be empty")]
    Empty,
}

impl TaskTitleError {
    /// Code reported for this rejection.
    #[must_use]
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::Empty => ErrorCode::TaskEmpty,
        }
    }
}
