//! One use case per user intent.
//!
//! Every use case validates before it mutates, so a failed call leaves the
//! repository exactly as it found it. Backend failures are folded into the
//! operation's catch-all [`TaskError`] variant.

mod add;
mod clear;
mod edit;
mod filter;
mod hydrate;
mod remove;
mod state;
mod toggle;

pub use add::AddTask;
pub use clear::ClearAllTasks;
pub use edit::EditTask;
pub use filter::FilterTasks;
pub use hydrate::HydrateTasks;
pub use remove::RemoveTask;
pub use state::{GetTasksState, TasksState};
pub use toggle::ToggleTask;

use anyhow::Error;
use tracing::warn;

use crate::error::TaskError;

/// Build a mapper turning a backend error into the given catch-all variant.
fn wrap_failure<E>(variant: fn(Error) -> TaskError) -> impl Fn(E) -> TaskError
where
    E: Into<Error>,
{
    move |err| {
        let failure = variant(err.into());
        warn!(code = %failure.code(), error = %failure, "Task operation failed");
        failure
    }
}
