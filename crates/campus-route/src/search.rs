//! Building search over location names and categories.

use campus_core::{CampusGraph, Location, NodeId};
use serde::Serialize;

use crate::report::Complexity;

pub const SEARCH_COMPLEXITY: Complexity = Complexity {
    time: "O(V * L)",
    space: "O(V)",
    description: "Linear scan with case-insensitive substring matching",
};

/// Result of a building search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    /// The trimmed query.
    pub query: String,
    pub found: bool,
    /// Location whose name equals the query, ignoring case.
    pub exact: Option<NodeId>,
    /// Every location whose name or category contains the query, by id.
    pub results: Vec<Location>,
    pub algorithm: &'static str,
    pub complexity: Complexity,
}

/// Finds locations matching `query`.
///
/// Matching is case-insensitive. A blank query matches nothing.
pub fn search_locations(graph: &CampusGraph, query: &str) -> SearchReport {
    let query = query.trim();
    let needle = query.to_lowercase();

    let (exact, results) = if needle.is_empty() {
        (None, Vec::new())
    } else {
        let exact = graph.node_id(query).or_else(|| {
            graph
                .locations()
                .iter()
                .find(|loc| loc.name.to_lowercase() == needle)
                .map(|loc| loc.id)
        });
        let results: Vec<Location> = graph
            .locations()
            .iter()
            .filter(|loc| {
                loc.name.to_lowercase().contains(&needle)
                    || loc.kind.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        (exact, results)
    };

    tracing::debug!(query, matches = results.len(), "building search");

    SearchReport {
        query: query.to_string(),
        found: !results.is_empty(),
        exact,
        results,
        algorithm: "linear search",
        complexity: SEARCH_COMPLEXITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::campus_graph;

    fn ids(report: &SearchReport) -> Vec<u32> {
        report.results.iter().map(|loc| loc.id.0).collect()
    }

    #[test]
    fn exact_name_is_found() {
        let graph = campus_graph();
        let report = search_locations(&graph, "Library");
        assert!(report.found);
        assert_eq!(report.exact, Some(NodeId(1)));
        assert_eq!(ids(&report), vec![1]);
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        let graph = campus_graph();
        let report = search_locations(&graph, "  main GATE ");
        assert_eq!(report.query, "main GATE");
        assert_eq!(report.exact, Some(NodeId(2)));
        assert_eq!(ids(&report), vec![2]);
    }

    #[test]
    fn substring_matches_names_in_id_order() {
        let graph = campus_graph();
        let report = search_locations(&graph, "ar");
        // Library, Parking Lot, Garden
        assert_eq!(ids(&report), vec![1, 6, 8]);
        assert_eq!(report.exact, None);
    }

    #[test]
    fn category_matches() {
        let graph = campus_graph();
        let report = search_locations(&graph, "sports");
        assert_eq!(ids(&report), vec![7]);
    }

    #[test]
    fn no_match() {
        let graph = campus_graph();
        let report = search_locations(&graph, "Swimming Pool");
        assert!(!report.found);
        assert!(report.results.is_empty());
        assert_eq!(report.exact, None);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let graph = campus_graph();
        let report = search_locations(&graph, "   ");
        assert!(!report.found);
        assert_eq!(report.query, "");
    }
}
