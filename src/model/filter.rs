//! Search and facet filtering for list screens.
//!
//! A record matches a [`Filter`] when its free-text fields contain the search term
//! (case-insensitive) and, for every facet group with a selection, the record's value for
//! that facet is one of the selected values. Groups are ANDed, values within a group ORed.
//! The server applies the same filter to list endpoints that the client applies on every
//! keystroke.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Query parameter carrying the free-text search term.
pub const SEARCH_PARAM: &str = "q";

/// A record that can be searched and faceted.
pub trait Filterable {
    /// Free-text fields searched by the filter's term.
    fn search_text(&self) -> Vec<&str>;

    /// The record's value for a facet group, `None` when the record has no value.
    fn facet(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    /// Lower-cased, trimmed search term
    search: String,
    facets: BTreeMap<String, BTreeSet<String>>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter from query parameters.
    ///
    /// `q` carries the search term; each key in `facet_keys` may carry a comma-separated list
    /// of selected values. Unknown keys are ignored.
    pub fn from_query(params: &HashMap<String, String>, facet_keys: &[&str]) -> Self {
        let mut filter = Self::new();

        if let Some(term) = params.get(SEARCH_PARAM) {
            filter.set_search(term);
        }

        for key in facet_keys {
            if let Some(values) = params.get(*key) {
                for value in values.split(',').map(str::trim).filter(|v| !v.is_empty()) {
                    filter.select(key, value);
                }
            }
        }

        filter
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.set_search(term);
        self
    }

    pub fn with_facet(mut self, key: &str, value: &str) -> Self {
        self.select(key, value);
        self
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_lowercase();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn select(&mut self, key: &str, value: &str) {
        self.facets
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string());
    }

    /// Adds the value to the facet group if absent, removes it otherwise.
    pub fn toggle(&mut self, key: &str, value: &str) {
        let group = self.facets.entry(key.to_string()).or_default();
        if !group.remove(value) {
            group.insert(value.to_string());
        }
        if group.is_empty() {
            self.facets.remove(key);
        }
    }

    /// Replaces a facet group with a single value, or clears it when `value` is empty.
    pub fn set_single(&mut self, key: &str, value: &str) {
        self.facets.remove(key);
        if !value.is_empty() {
            self.select(key, value);
        }
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.facets
            .get(key)
            .is_some_and(|group| group.contains(value))
    }

    /// Whether neither a search term nor any facet selection is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.facets.values().all(BTreeSet::is_empty)
    }

    /// Case-insensitive substring match over the record's free-text fields.
    pub fn text_matches<T: Filterable>(&self, record: &T) -> bool {
        if self.search.is_empty() {
            return true;
        }

        record
            .search_text()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.search))
    }

    /// Every facet group with a selection must contain the record's value.
    pub fn facets_match<T: Filterable>(&self, record: &T) -> bool {
        self.facets.iter().all(|(key, selected)| {
            selected.is_empty()
                || record
                    .facet(key)
                    .is_some_and(|value| selected.contains(&value))
        })
    }

    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        self.text_matches(record) && self.facets_match(record)
    }

    /// Keeps the records matching the filter, preserving order.
    pub fn apply<T: Filterable>(&self, records: Vec<T>) -> Vec<T> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct Row {
        name: &'static str,
        notes: Option<&'static str>,
        status: &'static str,
        farm_id: Option<i32>,
    }

    impl Filterable for Row {
        fn search_text(&self) -> Vec<&str> {
            let mut fields = vec![self.name];
            if let Some(notes) = self.notes {
                fields.push(notes);
            }
            fields
        }

        fn facet(&self, key: &str) -> Option<String> {
            match key {
                "status" => Some(self.status.to_string()),
                "farm_id" => self.farm_id.map(|id| id.to_string()),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Milking Robot",
                notes: Some("Barn A"),
                status: "operational",
                farm_id: Some(1),
            },
            Row {
                name: "Feed Mixer",
                notes: None,
                status: "needs_service",
                farm_id: Some(2),
            },
            Row {
                name: "Tractor",
                notes: Some("robot arm attachment"),
                status: "out_of_service",
                farm_id: None,
            },
        ]
    }

    fn names(rows: Vec<Row>) -> Vec<&'static str> {
        rows.into_iter().map(|r| r.name).collect()
    }

    /// Expect an empty filter to keep every record
    #[test]
    fn empty_filter_matches_everything() {
        let filter = Filter::new();

        assert!(filter.is_empty());
        assert_eq!(filter.apply(rows()).len(), 3);
    }

    /// Expect the search term to match any text field regardless of case
    #[test]
    fn search_is_case_insensitive_across_fields() {
        let filter = Filter::new().with_search("  ROBOT ");

        assert_eq!(names(filter.apply(rows())), vec!["Milking Robot", "Tractor"]);
    }

    /// Expect values within one facet group to be ORed
    #[test]
    fn values_within_group_are_ored() {
        let filter = Filter::new()
            .with_facet("status", "operational")
            .with_facet("status", "needs_service");

        assert_eq!(names(filter.apply(rows())), vec!["Milking Robot", "Feed Mixer"]);
    }

    /// Expect facet groups and the search term to be ANDed
    #[test]
    fn groups_and_search_are_anded() {
        let filter = Filter::new()
            .with_search("robot")
            .with_facet("status", "operational")
            .with_facet("status", "out_of_service")
            .with_facet("farm_id", "1");

        assert_eq!(names(filter.apply(rows())), vec!["Milking Robot"]);
    }

    /// Expect a record without a value for a selected facet to be excluded
    #[test]
    fn missing_facet_value_does_not_match_selection() {
        let filter = Filter::new().with_facet("farm_id", "1").with_facet("farm_id", "2");

        assert_eq!(names(filter.apply(rows())), vec!["Milking Robot", "Feed Mixer"]);
    }

    /// Expect toggling a value twice to clear the group entirely
    #[test]
    fn toggle_adds_then_removes() {
        let mut filter = Filter::new();

        filter.toggle("status", "operational");
        assert!(filter.is_selected("status", "operational"));

        filter.toggle("status", "operational");
        assert!(!filter.is_selected("status", "operational"));
        assert!(filter.is_empty());
    }

    /// Expect query parameters to populate search and known facets only
    #[test]
    fn builds_from_query_parameters() {
        let params = HashMap::from([
            ("q".to_string(), "Mixer".to_string()),
            ("status".to_string(), "needs_service, operational,".to_string()),
            ("unknown".to_string(), "x".to_string()),
        ]);

        let filter = Filter::from_query(&params, &["status", "farm_id"]);

        assert_eq!(filter.search(), "mixer");
        assert!(filter.is_selected("status", "needs_service"));
        assert!(filter.is_selected("status", "operational"));
        assert!(!filter.is_selected("unknown", "x"));
        assert_eq!(names(filter.apply(rows())), vec!["Feed Mixer"]);
    }
}
