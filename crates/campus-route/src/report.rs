//! Result assembly for shortest-path runs.
//!
//! [`assemble`] turns the final state and trace of a [`DijkstraRun`] into a
//! [`PathReport`]: the consumer-facing result with display names, the
//! reconstructed path, every trace step, and complexity metadata. The raw
//! `INFINITY` sentinel never leaves this crate; unreached distances become
//! `None`.

use campus_core::{CampusGraph, NodeId};
use serde::Serialize;

use crate::dijkstra::{DijkstraRun, StepKind, TraceStep, INFINITY};
use crate::error::RouteError;

/// Static cost description attached to every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
    pub description: &'static str,
}

/// Complexity of the binary-heap Dijkstra.
pub const DIJKSTRA_COMPLEXITY: Complexity = Complexity {
    time: "O((V + E) log V)",
    space: "O(V)",
    description: "Using min-heap priority queue",
};

/// One trace step as exposed to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub node: Option<NodeId>,
    pub kind: StepKind,
    pub action: String,
    pub explanation: String,
    pub visited: Vec<bool>,
    /// `None` = not yet reached.
    pub distances: Vec<Option<u64>>,
    pub previous: Vec<Option<NodeId>>,
    pub queue: Vec<NodeId>,
}

impl From<&TraceStep> for StepReport {
    fn from(step: &TraceStep) -> Self {
        StepReport {
            step: step.step,
            node: step.node,
            kind: step.kind,
            action: step.action.clone(),
            explanation: step.explanation.clone(),
            visited: step.visited.clone(),
            distances: step
                .distances
                .iter()
                .map(|&d| (d != INFINITY).then_some(d))
                .collect(),
            previous: step.previous.clone(),
            queue: step.queue.clone(),
        }
    }
}

/// Structured result of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathReport {
    pub algorithm: &'static str,
    pub start: NodeId,
    pub end: NodeId,
    pub start_name: String,
    pub end_name: String,
    /// Total distance in meters; `None` if the destination is unreachable.
    pub distance: Option<u64>,
    /// Node ids from start to end; empty if unreachable.
    pub path: Vec<NodeId>,
    pub steps: Vec<StepReport>,
    pub complexity: Complexity,
}

impl PathReport {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Packages a finished run into a [`PathReport`].
pub fn assemble(graph: &CampusGraph, run: &DijkstraRun) -> Result<PathReport, RouteError> {
    Ok(PathReport {
        algorithm: "dijkstra",
        start: run.start,
        end: run.end,
        start_name: graph.location(run.start)?.name.clone(),
        end_name: graph.location(run.end)?.name.clone(),
        distance: run.distance(),
        path: run.path.clone(),
        steps: run.steps.iter().map(StepReport::from).collect(),
        complexity: DIJKSTRA_COMPLEXITY,
    })
}
