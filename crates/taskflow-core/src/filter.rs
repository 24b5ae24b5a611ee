use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Completion-status filter applied to a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet done.
    Pending,
    /// Completed tasks.
    Done,
}

/// Raised by [`TaskFilter::from_str`] for unknown filter names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task filter: {0}")]
pub struct UnknownFilter(pub String);

impl TaskFilter {
    /// All filters, in presentation order.
    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Done];

    /// String representation used in URLs and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }

    /// Whether `raw` names a filter exactly.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        raw.parse::<Self>().is_ok()
    }

    /// Parse `raw`, falling back to [`TaskFilter::All`] for anything unknown.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// Whether a task with the given completion flag passes the filter.
    #[must_use]
    pub const fn admits(self, done: bool) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !done,
            Self::Done => done,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| UnknownFilter(s.to_owned()))
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a free-text search query: trimmed and lower-cased.
///
/// The literals `"undefined"` and `"null"` leak in from query strings and read
/// as an empty search.
#[must_use]
pub fn normalize_search(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();
    if normalized == "undefined" || normalized == "null" {
        String::new()
    } else {
        normalized
    }
}
