use std::collections::HashMap;

use crate::model::filter::Filter;

/// Raw query parameters of a list endpoint
pub type ListParams = HashMap<String, String>;

/// Builds the list filter from `?q=` and the endpoint's facet parameters
pub fn list_filter(params: &ListParams, facet_keys: &[&str]) -> Filter {
    Filter::from_query(params, facet_keys)
}

/// A numeric parameter given as a single value, `None` when absent, a list or malformed
pub fn single_id(params: &ListParams, key: &str) -> Option<i32> {
    params.get(key).and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Expect a single farm ID to be parsed and a list of IDs to be left to the filter
    #[test]
    fn single_id_only_parses_single_values() {
        assert_eq!(single_id(&params(&[("farm_id", " 3 ")]), "farm_id"), Some(3));
        assert_eq!(single_id(&params(&[("farm_id", "3,4")]), "farm_id"), None);
        assert_eq!(single_id(&params(&[]), "farm_id"), None);
    }

    /// Expect the search term and facets to be taken from the query
    #[test]
    fn list_filter_reads_search_and_facets() {
        let filter = list_filter(
            &params(&[("q", "Robot"), ("status", "operational,retired"), ("other", "x")]),
            &["status"],
        );

        assert_eq!(filter.search(), "robot");
        assert!(filter.is_selected("status", "retired"));
        assert!(!filter.is_selected("other", "x"));
    }
}
