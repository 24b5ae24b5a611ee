use crate::error::TaskTitleError;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Validated, normalized task title.
///
/// Equality and hashing ignore case, so `"Buy milk"` and `"BUY MILK"` are the
/// same title.
#[derive(Debug, Clone)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Validate and normalize a raw title.
    ///
    /// # Errors
    /// Returns [`TaskTitleError::Empty`] when nothing remains after normalization.
    pub fn new(raw: &str) -> Result<Self, TaskTitleError> {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return Err(TaskTitleError::Empty);
        }
        Ok(Self(normalized))
    }

    /// Trim the input and collapse internal whitespace runs into single spaces.
    ///
    /// Whitespace is the ECMAScript `\s` set: Unicode whitespace without
    /// U+0085, plus the byte order mark U+FEFF.
    #[must_use]
    pub fn normalize(raw: &str) -> String {
        Self::words(raw).collect::<Vec<_>>().join(" ")
    }

    /// Whether `raw` normalizes to a non-empty title.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        Self::words(raw).next().is_some()
    }

    fn words(raw: &str) -> impl Iterator<Item = &str> {
        raw.split(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
            .filter(|word| !word.is_empty())
    }

    /// Case-folded comparison key for an already normalized title.
    #[must_use]
    pub fn fold(normalized: &str) -> String {
        normalized.to_lowercase()
    }

    /// Compare against a raw string, normalizing it first.
    #[must_use]
    pub fn equals_raw(&self, raw: &str) -> bool {
        Self::fold(&self.0) == Self::fold(&Self::normalize(raw))
    }

    /// Borrow the normalized value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the title, yielding the normalized string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl PartialEq for TaskTitle {
    fn eq(&self, other: &Self) -> bool {
        Self::fold(&self.0) == Self::fold(&other.0)
    }
}

impl Eq for TaskTitle {}

impl Hash for TaskTitle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::fold(&self.0).hash(state);
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl TryFrom<&str> for TaskTitle {
    type Error = TaskTitleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
