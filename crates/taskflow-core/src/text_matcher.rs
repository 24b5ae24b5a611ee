use crate::filter::normalize_search;
use crate::task::TaskRecord;

/// Case-insensitive substring matcher over task titles.
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// Normalize a query string into a matcher. Returns `None` for blank inputs.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        let needle = normalize_search(query);
        if needle.is_empty() {
            return None;
        }
        Some(Self { needle })
    }

    /// Determine whether the record's title contains the query.
    #[must_use]
    pub fn matches(&self, record: &TaskRecord) -> bool {
        self.matches_title(&record.title)
    }

    /// Determine whether `title` contains the query.
    #[must_use]
    pub fn matches_title(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;

    fn record(title: &str) -> TaskRecord {
        TaskRecord {
            id: TaskId::from("id"),
            title: title.into(),
            done: false,
            created_at: 0,
        }
    }

    #[test]
    fn matcher_skips_blank_queries() {
        assert!(TextMatcher::new("").is_none());
        assert!(TextMatcher::new("   ").is_none());
        assert!(TextMatcher::new("\n").is_none());
        assert!(TextMatcher::new("undefined").is_none());
        assert!(TextMatcher::new("null").is_none());
    }

    #[test]
    fn matcher_respects_case_insensitive_search() {
        let milk = record("Buy MILK today");

        let matcher = TextMatcher::new("milk").unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches(&milk));

        let matcher = TextMatcher::new(" Milk ").unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches(&milk));

        let missing = TextMatcher::new("bread").unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(!missing.matches(&milk));
    }

    #[test]
    fn matcher_folds_non_ascii() {
        let matcher = TextMatcher::new("ÇÃO").unwrap_or_else(|| panic!("matcher must exist for queries with content"));
        assert!(matcher.matches_title("Revisão da documentação"));
    }
}
