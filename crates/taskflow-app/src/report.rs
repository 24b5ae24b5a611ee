//! Uniform `{ok, code, error}` shape for UI layers.

use serde::Serialize;
use taskflow_core::{ErrorCode, Task, TaskRecord};

use crate::error::{TaskError, TaskResult};

/// Outcome of an operation, flattened for presentation.
///
/// `ok` is `true` exactly when `code` and `error` are both `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationReport {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Failure classification.
    pub code: Option<ErrorCode>,
    /// Human-readable failure message.
    pub error: Option<String>,
    /// Task produced by the operation, when it yields one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskRecord>,
}

impl OperationReport {
    /// Successful outcome without payload.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            ok: true,
            code: None,
            error: None,
            task: None,
        }
    }

    /// Failed outcome describing `err`.
    #[must_use]
    pub fn failure(err: &TaskError) -> Self {
        Self {
            ok: false,
            code: Some(err.code()),
            error: Some(err.to_string()),
            task: None,
        }
    }

    /// Attach the task produced by the operation.
    #[must_use]
    pub fn with_task(mut self, task: &Task) -> Self {
        self.task = Some(task.to_record());
        self
    }
}

impl From<&TaskError> for OperationReport {
    fn from(err: &TaskError) -> Self {
        Self::failure(err)
    }
}

impl From<TaskResult<()>> for OperationReport {
    fn from(result: TaskResult<()>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(err) => Self::failure(&err),
        }
    }
}

impl From<TaskResult<Task>> for OperationReport {
    fn from(result: TaskResult<Task>) -> Self {
        match result {
            Ok(task) => Self::success().with_task(&task),
            Err(err) => Self::failure(&err),
        }
    }
}

impl From<TaskResult<usize>> for OperationReport {
    fn from(result: TaskResult<usize>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(err) => Self::failure(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taskflow_core::TaskId;

    #[test]
    fn success_serializes_with_null_code_and_error() {
        let json = serde_json::to_value(OperationReport::success()).unwrap_or_else(|err| panic!("serialize: {err}"));
        assert_eq!(json, json!({ "ok": true, "code": null, "error": null }));
    }

    #[test]
    fn failure_carries_code_and_message() {
        let report = OperationReport::from(Err::<(), _>(TaskError::Duplicate));
        assert!(!report.ok);
        assert_eq!(report.code, Some(ErrorCode::TaskDuplicate));
        let json = serde_json::to_value(&report).unwrap_or_else(|err| panic!("serialize: {err}"));
        assert_eq!(json["code"], "TASK_DUPLICATE");
        assert_eq!(json["error"], "Task already exists");
    }

    #[test]
    fn task_payload_is_attached_on_success() {
        let task = Task::new(TaskId::from("id-1"), "Buy milk").with_created_at(7);
        let report = OperationReport::from(Ok::<_, TaskError>(task));
        assert!(report.ok);
        assert_eq!(report.code, None);
        assert_eq!(report.error, None);
        assert_eq!(report.task.map(|t| t.title), Some("Buy milk".to_owned()));
    }

    #[test]
    fn storage_failures_report_storage_error() {
        let report = OperationReport::from(Err::<(), _>(TaskError::Storage(anyhow::anyhow!("disk full"))));
        assert_eq!(report.code.map(ErrorCode::as_str), Some("STORAGE_ERROR"));
        assert_eq!(report.error.as_deref(), Some("disk full"));
    }
}
