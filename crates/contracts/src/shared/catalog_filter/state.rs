use super::snapshot::CatalogEntry;
use crate::enums::menu_category::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};

/// Category half of the filter predicate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` maps to [`CategoryFilter::All`]; any other label, known or
    /// not, filters on exact equality.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(label) => label.as_str(),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => label == category,
        }
    }
}

/// Case-folds and trims a search query.
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Active category, active query and which category control is highlighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    category: CategoryFilter,
    query: String,
    active_control: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            query: String::new(),
            active_control: Some(ALL_CATEGORIES.to_string()),
        }
    }
}

impl FilterState {
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Normalized query, empty when no search is in effect
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_control(&self) -> Option<&str> {
        self.active_control.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    /// Selecting a category drops the query and highlights that control.
    pub fn select_category(&mut self, label: &str) {
        self.category = CategoryFilter::from_label(label);
        self.query.clear();
        self.active_control = Some(label.to_string());
    }

    /// A search always supersedes the category. A non-empty query also
    /// unhighlights every category control.
    pub fn search(&mut self, text: &str) {
        self.query = normalize_query(text);
        self.category = CategoryFilter::All;
        if !self.query.is_empty() {
            self.active_control = None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Conjunction of the category and query predicates.
    pub fn matches(&self, entry: &CatalogEntry<'_>) -> bool {
        self.category.matches(entry.category) && self.matches_query(entry)
    }

    fn matches_query(&self, entry: &CatalogEntry<'_>) -> bool {
        if self.query.is_empty() {
            return true;
        }
        entry.title.to_lowercase().contains(&self.query)
            || entry.price.to_lowercase().contains(&self.query)
    }
}

/// When live typing is allowed to re-run the search.
///
/// The Enter key and the search button always search; keystrokes only do
/// once the input is empty or at least `min_live_query_len` characters long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    pub min_live_query_len: usize,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            min_live_query_len: 3,
        }
    }
}

impl SearchPolicy {
    pub fn new(min_live_query_len: usize) -> Self {
        Self { min_live_query_len }
    }

    /// Length is measured on the raw input, before trimming.
    pub fn should_search_live(&self, raw_input: &str) -> bool {
        let len = raw_input.chars().count();
        len == 0 || len >= self.min_live_query_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry<'a>(title: &'a str, price: &'a str, category: &'a str) -> CatalogEntry<'a> {
        CatalogEntry {
            title,
            price,
            category,
        }
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  TeA "), "tea");
        assert_eq!(normalize_query("\t\n"), "");
    }

    #[test]
    fn test_category_filter_from_label() {
        assert_eq!(CategoryFilter::from_label("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("coffee"),
            CategoryFilter::Only("coffee".to_string())
        );
        assert_eq!(CategoryFilter::from_label("coffee").label(), "coffee");
        assert_eq!(CategoryFilter::All.label(), "all");
    }

    #[test]
    fn test_query_matches_title_or_price() {
        let mut state = FilterState::default();
        let roll = entry("Spring Roll", "$5.00", "snacks");

        state.search("roll");
        assert!(state.matches(&roll));
        state.search("5.0");
        assert!(state.matches(&roll));
        state.search("tea");
        assert!(!state.matches(&roll));
    }

    #[test]
    fn test_search_supersedes_category() {
        let mut state = FilterState::default();
        state.select_category("coffee");
        state.search("roll");
        assert_eq!(state.category(), &CategoryFilter::All);
        assert_eq!(state.active_control(), None);
        assert!(state.matches(&entry("Spring Roll", "$5.00", "snacks")));
    }

    #[test]
    fn test_empty_search_keeps_active_control() {
        let mut state = FilterState::default();
        state.select_category("coffee");
        state.search("   ");
        assert_eq!(state.active_control(), Some("coffee"));
        assert!(!state.is_searching());
    }

    #[test]
    fn test_live_search_threshold() {
        let policy = SearchPolicy::default();
        assert!(policy.should_search_live(""));
        assert!(!policy.should_search_live("t"));
        assert!(!policy.should_search_live("te"));
        assert!(policy.should_search_live("tea"));

        let eager = SearchPolicy::new(1);
        assert!(eager.should_search_live("t"));
    }

    #[test]
    fn test_live_search_counts_characters_not_bytes() {
        let policy = SearchPolicy::default();
        assert!(!policy.should_search_live("茶茶"));
        assert!(policy.should_search_live("茶茶茶"));
    }
}
