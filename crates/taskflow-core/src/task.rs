use crate::id::TaskId;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    i64::try_from(millis).unwrap_or(i64::MAX)
}

/// One to-do item.
///
/// Values are immutable: [`Task::toggle`] and [`Task::update_title`] return new
/// tasks and leave the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    done: bool,
    created_at: i64,
}

impl Task {
    /// Create a pending task stamped with the current time.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
            created_at: now_millis(),
        }
    }

    /// Override the completion flag.
    #[must_use]
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Override the creation timestamp (milliseconds since the Unix epoch).
    #[must_use]
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    /// Identifier assigned at creation.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Normalized title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the task is completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Creation timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Copy of this task with `done` inverted.
    #[must_use]
    pub fn toggle(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }

    /// Copy of this task carrying `title`.
    #[must_use]
    pub fn update_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// Plain, serializable copy of the four attributes.
    #[must_use]
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            done: self.done,
            created_at: self.created_at,
        }
    }

    /// Rebuild a task from a plain record.
    #[must_use]
    pub fn from_record(record: TaskRecord) -> Self {
        let TaskRecord {
            id,
            title,
            done,
            created_at,
        } = record;
        Self {
            id,
            title,
            done,
            created_at,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self::from_record(record)
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        task.to_record()
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            done: task.done,
            created_at: task.created_at,
        }
    }
}

/// Persisted shape of a task.
///
/// A missing or `null` `done` reads as `false` and a missing or `null`
/// `createdAt` as the time of reading, so snapshots written by older front ends
/// still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Identifier.
    pub id: TaskId,
    /// Normalized title.
    pub title: String,
    /// Completion flag.
    #[serde(default, deserialize_with = "done_or_false")]
    pub done: bool,
    /// Creation timestamp in milliseconds since the Unix epoch.
    #[serde(default = "now_millis", deserialize_with = "created_at_or_now")]
    pub created_at: i64,
}

fn done_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn created_at_or_now<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_else(now_millis))
}
