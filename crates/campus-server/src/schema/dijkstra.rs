//! Shortest-path response in the visualization wire format.
//!
//! Absent values use `-1`: an unreached distance, a missing predecessor, the
//! acting node of the initialization step, and the total distance of an
//! unreachable destination.

use campus_core::NodeId;
use campus_route::{Complexity, PathReport, StepKind, StepReport};
use serde::Serialize;

/// Response of `GET /api/dijkstra`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DijkstraResponse {
    pub algorithm: &'static str,
    pub start: u32,
    pub end: u32,
    pub start_name: String,
    pub end_name: String,
    pub distance: i64,
    pub path: Vec<u32>,
    pub steps: Vec<StepView>,
    pub complexity: Complexity,
}

/// A single trace step for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub step: usize,
    pub node: i64,
    pub kind: StepKind,
    pub action: String,
    pub explanation: String,
    pub visited: Vec<bool>,
    pub distances: Vec<i64>,
    pub previous: Vec<i64>,
    pub queue: Vec<u32>,
}

fn node_or_missing(node: Option<NodeId>) -> i64 {
    node.map_or(-1, |id| i64::from(id.0))
}

fn distance_or_missing(distance: Option<u64>) -> i64 {
    distance
        .and_then(|d| i64::try_from(d).ok())
        .unwrap_or(-1)
}

impl From<StepReport> for StepView {
    fn from(step: StepReport) -> Self {
        StepView {
            step: step.step,
            node: node_or_missing(step.node),
            kind: step.kind,
            action: step.action,
            explanation: step.explanation,
            visited: step.visited,
            distances: step.distances.into_iter().map(distance_or_missing).collect(),
            previous: step.previous.into_iter().map(node_or_missing).collect(),
            queue: step.queue.into_iter().map(|id| id.0).collect(),
        }
    }
}

impl From<PathReport> for DijkstraResponse {
    fn from(report: PathReport) -> Self {
        DijkstraResponse {
            algorithm: report.algorithm,
            start: report.start.0,
            end: report.end.0,
            start_name: report.start_name,
            end_name: report.end_name,
            distance: distance_or_missing(report.distance),
            path: report.path.into_iter().map(|id| id.0).collect(),
            steps: report.steps.into_iter().map(StepView::from).collect(),
            complexity: report.complexity,
        }
    }
}
