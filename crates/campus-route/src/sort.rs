//! Locations ordered by straight-line distance from a reference point.
//!
//! Distances come from the layout coordinates, not from the path network,
//! so this view never runs the shortest-path engine.

use campus_core::{CampusGraph, NodeId};
use serde::Serialize;

use crate::error::{ensure_node, RouteError};
use crate::report::Complexity;

pub const SORT_COMPLEXITY: Complexity = Complexity {
    time: "O(V log V)",
    space: "O(V)",
    description: "Stable merge sort on straight-line distance",
};

/// A location and its distance from the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedLocation {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Straight-line distance in whole meters.
    pub distance: u64,
}

/// Every location ranked by distance from `reference`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortReport {
    pub reference: NodeId,
    pub reference_name: String,
    pub sorted: Vec<RankedLocation>,
    pub algorithm: &'static str,
    pub complexity: Complexity,
}

/// Ranks all locations by straight-line distance from `reference`.
///
/// The reference comes first; equal distances keep ascending id order.
pub fn sort_by_distance(
    graph: &CampusGraph,
    reference: NodeId,
) -> Result<SortReport, RouteError> {
    ensure_node(graph, reference)?;
    let origin = graph.location(reference)?;

    let mut sorted: Vec<RankedLocation> = graph
        .locations()
        .iter()
        .map(|loc| RankedLocation {
            id: loc.id,
            name: loc.name.clone(),
            kind: loc.kind.clone(),
            distance: origin.straight_line_distance(loc).round() as u64,
        })
        .collect();
    sorted.sort_by_key(|ranked| (ranked.id != reference, ranked.distance, ranked.id));

    tracing::debug!(%reference, count = sorted.len(), "sorted locations by distance");

    Ok(SortReport {
        reference,
        reference_name: origin.name.clone(),
        sorted,
        algorithm: "merge sort",
        complexity: SORT_COMPLEXITY,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::campus_graph;

    fn order(report: &SortReport) -> Vec<u32> {
        report.sorted.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn sorted_from_administration() {
        let graph = campus_graph();
        let report = sort_by_distance(&graph, NodeId(0)).unwrap();
        assert_eq!(report.reference_name, "Administration");
        assert_eq!(order(&report), vec![0, 4, 1, 5, 2, 8, 6, 9, 3, 7]);
        assert_eq!(report.sorted[0].distance, 0);
        assert_eq!(report.sorted[1].distance, 200);
        assert_eq!(report.sorted[2].distance, 250);
    }

    #[test]
    fn ties_keep_id_order() {
        let graph = campus_graph();
        let report = sort_by_distance(&graph, NodeId(8)).unwrap();
        // Cafeteria and Football Ground are both 403m from the Garden, as are
        // Administration and Auditorium at 532m.
        assert_eq!(order(&report), vec![8, 9, 5, 6, 4, 7, 1, 2, 0, 3]);
    }

    #[test]
    fn distances_are_non_decreasing() {
        let graph = campus_graph();
        for reference in 0..10 {
            let report = sort_by_distance(&graph, NodeId(reference)).unwrap();
            assert_eq!(report.sorted.len(), 10);
            assert_eq!(report.sorted[0].id, NodeId(reference));
            for pair in report.sorted.windows(2) {
                assert!(pair[0].distance <= pair[1].distance);
            }
        }
    }

    #[test]
    fn unknown_reference_fails() {
        let graph = campus_graph();
        assert_eq!(
            sort_by_distance(&graph, NodeId(11)).unwrap_err(),
            RouteError::UnknownNode {
                id: NodeId(11),
                node_count: 10
            }
        );
    }
}
