//! Domain types for taskflow task lists.

/// Error codes and value-object rejections.
pub mod error;
/// Completion-status filters and search normalization.
pub mod filter;
/// Identifier types.
pub mod id;
/// Persisted snapshot shapes.
pub mod snapshot;
/// The task entity and its plain record.
pub mod task;
/// Free-text search over titles.
pub mod text_matcher;
/// Title value object.
pub mod title;

pub use error::{ErrorCode, TaskTitleError};
pub use filter::{TaskFilter, UnknownFilter, normalize_search};
pub use id::TaskId;
pub use snapshot::StoredTasks;
pub use task::{Task, TaskRecord, now_millis};
pub use text_matcher::TextMatcher;
pub use title::TaskTitle;

use serde::{Deserialize, Serialize};

/// Completion counters for a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub done: usize,
    /// Number of tasks not yet done.
    pub pending: usize,
}

impl TaskStats {
    /// Count tasks from their completion flags.
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let (total, done) = flags
            .into_iter()
            .fold((0, 0), |(total, done), flag| (total + 1, done + usize::from(flag)));
        Self {
            total,
            done,
            pending: total - done,
        }
    }

    /// Count the given records.
    #[must_use]
    pub fn of_records(records: &[TaskRecord]) -> Self {
        Self::from_flags(records.iter().map(|record| record.done))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_empty_list_are_zero() {
        assert_eq!(TaskStats::from_flags([]), TaskStats::default());
    }

    #[test]
    fn stats_split_done_and_pending() {
        let stats = TaskStats::from_flags([true, false, false, true, false]);
        assert_eq!(
            stats,
            TaskStats {
                total: 5,
                done: 2,
                pending: 3
            }
        );
        assert_eq!(stats.total, stats.done + stats.pending);
    }

    #[test]
    fn stats_of_records() {
        let records = vec![
            Task::new(TaskId::from("a"), "One").with_done(true).to_record(),
            Task::new(TaskId::from("b"), "Two").to_record(),
        ];
        let stats = TaskStats::of_records(&records);
        assert_eq!((stats.total, stats.done, stats.pending), (2, 1, 1));
    }
}
