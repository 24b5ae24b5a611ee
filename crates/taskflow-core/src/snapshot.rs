//! Shapes accepted when reading a persisted task snapshot.

use crate::task::TaskRecord;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Snapshot returned by a storage backend.
///
/// Current writers emit the envelope; older ones stored a bare array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredTasks {
    /// A bare array of records.
    Bare(Vec<TaskRecord>),
    /// `{ "tasks": [...], "version": n }`.
    Envelope {
        /// Records, or `None` when the `tasks` member is absent or not an array.
        tasks: Option<Vec<TaskRecord>>,
        /// Schema version stamped by the writer.
        version: Option<u32>,
    },
}

impl StoredTasks {
    /// Envelope stamped with `version`, as written by current backends.
    #[must_use]
    pub const fn envelope(tasks: Vec<TaskRecord>, version: u32) -> Self {
        Self::Envelope {
            tasks: Some(tasks),
            version: Some(version),
        }
    }

    /// Interpret an arbitrary JSON document.
    ///
    /// Arrays become [`StoredTasks::Bare`]; anything else is read as an envelope
    /// whose `tasks` is `None` unless an array is found there.
    ///
    /// # Errors
    /// Returns an error when an array element is not a valid task record.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(items) => Ok(Self::Bare(records_from(items)?)),
            Value::Object(mut map) => {
                let tasks = match map.remove("tasks") {
                    Some(Value::Array(items)) => Some(records_from(items)?),
                    _ => None,
                };
                let version = map
                    .get("version")
                    .and_then(Value::as_u64)
                    .and_then(|v| u32::try_from(v).ok());
                Ok(Self::Envelope { tasks, version })
            }
            _ => Ok(Self::Envelope {
                tasks: None,
                version: None,
            }),
        }
    }

    /// Schema version, when the snapshot carries one.
    #[must_use]
    pub const fn version(&self) -> Option<u32> {
        match self {
            Self::Bare(_) => None,
            Self::Envelope { version, .. } => *version,
        }
    }

    /// Extract the task records, `None` when the snapshot holds no task array.
    #[must_use]
    pub fn into_tasks(self) -> Option<Vec<TaskRecord>> {
        match self {
            Self::Bare(tasks) => Some(tasks),
            Self::Envelope { tasks, .. } => tasks,
        }
    }
}

fn records_from(items: Vec<Value>) -> Result<Vec<TaskRecord>, serde_json::Error> {
    items.into_iter().map(serde_json::from_value).collect()
}

impl Serialize for StoredTasks {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bare(tasks) => tasks.serialize(s),
            Self::Envelope { tasks, version } => {
                let mut state = s.serialize_struct("StoredTasks", 2)?;
                state.serialize_field("tasks", tasks.as_deref().unwrap_or_default())?;
                state.serialize_field("version", version)?;
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for StoredTasks {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(d)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;
    use serde_json::json;

    fn parse(value: Value) -> StoredTasks {
        StoredTasks::from_value(value).unwrap_or_else(|err| panic!("must parse: {err}"))
    }

    #[test]
    fn bare_array_is_accepted() {
        let stored = parse(json!([{ "id": "a", "title": "One", "done": true, "createdAt": 1 }]));
        assert_eq!(stored.version(), None);
        let tasks = stored.into_tasks().unwrap_or_default();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId::from("a"));
        assert!(tasks[0].done);
    }

    #[test]
    fn envelope_is_accepted() {
        let stored = parse(json!({
            "tasks": [{ "id": "a", "title": "One", "done": false, "createdAt": 1 }],
            "version": 1
        }));
        assert_eq!(stored.version(), Some(1));
        assert_eq!(stored.into_tasks().map(|t| t.len()), Some(1));
    }

    #[test]
    fn non_array_tasks_yield_none() {
        assert_eq!(parse(json!({ "tasks": "oops", "version": 1 })).into_tasks(), None);
        assert_eq!(parse(json!({ "version": 1 })).into_tasks(), None);
        assert_eq!(parse(json!(42)).into_tasks(), None);
    }

    #[test]
    fn invalid_record_is_an_error() {
        assert!(StoredTasks::from_value(json!([{ "title": "no id" }])).is_err());
    }

    #[test]
    fn envelope_serializes_with_version() {
        let stored = StoredTasks::envelope(Vec::new(), 3);
        let json = serde_json::to_value(&stored).unwrap_or_else(|err| panic!("serialize: {err}"));
        assert_eq!(json, json!({ "tasks": [], "version": 3 }));

        let back: StoredTasks = serde_json::from_value(json).unwrap_or_else(|err| panic!("deserialize: {err}"));
        assert_eq!(back, stored);
    }
}
