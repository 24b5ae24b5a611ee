use taskflow_core::{TaskFilter, TaskRecord, TextMatcher, normalize_search};

/// Narrow an already fetched task list by completion status and title search.
///
/// Pure: never touches the repository, so it can run on every keystroke.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterTasks;

impl FilterTasks {
    /// Construct the use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Filter `tasks` by the raw `filter` name and `search` text.
    ///
    /// Unknown filter names behave as `"all"`; a blank search (including the
    /// literals `"undefined"` and `"null"`) does not narrow.
    #[must_use]
    pub fn execute(&self, tasks: &[TaskRecord], filter: &str, search: &str) -> Vec<TaskRecord> {
        self.apply(tasks, self.normalize_filter(filter), search)
    }

    /// Typed variant of [`FilterTasks::execute`].
    #[must_use]
    pub fn apply(&self, tasks: &[TaskRecord], filter: TaskFilter, search: &str) -> Vec<TaskRecord> {
        let matcher = TextMatcher::new(search);
        tasks
            .iter()
            .filter(|task| filter.admits(task.done))
            .filter(|task| matcher.as_ref().is_none_or(|m| m.matches(task)))
            .cloned()
            .collect()
    }

    /// Whether `filter` names a known filter exactly.
    #[must_use]
    pub fn is_valid_filter(&self, filter: &str) -> bool {
        TaskFilter::is_valid(filter)
    }

    /// Parse `filter`, falling back to [`TaskFilter::All`].
    #[must_use]
    pub fn normalize_filter(&self, filter: &str) -> TaskFilter {
        TaskFilter::normalize(filter)
    }

    /// Trim and lower-case `search`, collapsing `"undefined"`/`"null"` to empty.
    #[must_use]
    pub fn normalize_search(&self, search: &str) -> String {
        normalize_search(search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::{Task, TaskId};

    fn records() -> Vec<TaskRecord> {
        vec![
            Task::new(TaskId::from("a"), "Buy milk").to_record(),
            Task::new(TaskId::from("b"), "Buy MILK chocolate").with_done(true).to_record(),
            Task::new(TaskId::from("c"), "Walk dog").to_record(),
            Task::new(TaskId::from("d"), "Milkshake").to_record(),
        ]
    }

    fn ids(tasks: &[TaskRecord]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn pending_with_search() {
        let filtered = FilterTasks::new().execute(&records(), "pending", "milk");
        assert_eq!(ids(&filtered), vec!["a", "d"]);
        assert!(filtered.iter().all(|t| !t.done));
    }

    #[test]
    fn done_only() {
        let filtered = FilterTasks::new().execute(&records(), "done", "");
        assert_eq!(ids(&filtered), vec!["b"]);
    }

    #[test]
    fn unknown_filter_behaves_as_all() {
        let tasks = records();
        assert_eq!(FilterTasks::new().execute(&tasks, "bogus", ""), tasks);
        assert_eq!(FilterTasks::new().execute(&tasks, "all", ""), tasks);
    }

    #[test]
    fn placeholder_searches_do_not_narrow() {
        let tasks = records();
        assert_eq!(FilterTasks::new().execute(&tasks, "all", "undefined").len(), 4);
        assert_eq!(FilterTasks::new().execute(&tasks, "all", "null").len(), 4);
        assert_eq!(FilterTasks::new().execute(&tasks, "all", "   ").len(), 4);
    }

    #[test]
    fn search_is_case_insensitive() {
        let filtered = FilterTasks::new().execute(&records(), "all", "  CHOCO ");
        assert_eq!(ids(&filtered), vec!["b"]);
    }

    #[test]
    fn preserves_input_order_and_leaves_input_alone() {
        let tasks = records();
        let filtered = FilterTasks::new().apply(&tasks, TaskFilter::Pending, "");
        assert_eq!(ids(&filtered), vec!["a", "c", "d"]);
        assert_eq!(tasks.len(), 4);
    }

    #[test]
    fn normalization_helpers() {
        let use_case = FilterTasks::new();
        assert!(use_case.is_valid_filter("done"));
        assert!(!use_case.is_valid_filter("DONE"));
        assert_eq!(use_case.normalize_filter("DONE"), TaskFilter::All);
        assert_eq!(use_case.normalize_search(" Null "), "");
        assert_eq!(use_case.normalize_search(" Milk "), "milk");
    }
}
