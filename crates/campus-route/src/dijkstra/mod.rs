//! Instrumented Dijkstra shortest-path engine.
//!
//! [`find_path`] runs classic Dijkstra over the dense adjacency matrix and
//! records a [`TraceStep`] at every decision point:
//!
//! - one `Start` step for initialization;
//! - one `Visit` step each time a node is finalized;
//! - one `Relax` step each time a neighbor's distance improves;
//! - one `Reached` step when the destination is finalized, after which the
//!   run stops.
//!
//! Stale frontier entries (for nodes already visited) are discarded on pop
//! without a trace step. Ties on distance are broken by the lower node id.

pub mod state;
pub mod trace;

use campus_core::{CampusGraph, NodeId};

use crate::error::{ensure_node, RouteError};
use crate::report::{self, PathReport};

pub use state::{AlgorithmState, Frontier, FrontierEntry, INFINITY};
pub use trace::{StepKind, TraceRecorder, TraceStep};

/// Final state and trace of one completed run.
#[derive(Debug)]
pub struct DijkstraRun {
    pub start: NodeId,
    pub end: NodeId,
    pub state: AlgorithmState,
    pub path: Vec<NodeId>,
    pub steps: Vec<TraceStep>,
}

impl DijkstraRun {
    /// Total distance to the destination, `None` if unreachable.
    pub fn distance(&self) -> Option<u64> {
        self.state.distance_to(self.end)
    }
}

/// Computes the shortest path from `start` to `end` with a full step trace.
///
/// Fails fast with [`RouteError::UnknownNode`] if either id is not on the
/// map. An unreachable destination is not an error.
pub fn find_path(
    graph: &CampusGraph,
    start: NodeId,
    end: NodeId,
) -> Result<PathReport, RouteError> {
    let run = run(graph, start, end)?;
    report::assemble(graph, &run)
}

/// Runs the engine and returns the raw final state and trace.
pub fn run(graph: &CampusGraph, start: NodeId, end: NodeId) -> Result<DijkstraRun, RouteError> {
    ensure_node(graph, start)?;
    ensure_node(graph, end)?;

    let name = |id: NodeId| -> Result<&str, RouteError> {
        Ok(graph.location(id)?.name.as_str())
    };

    tracing::debug!(%start, %end, "running dijkstra");

    let node_count = graph.node_count();
    let mut state = AlgorithmState::new(node_count, start);
    let mut recorder = TraceRecorder::default();

    recorder.record(
        None,
        StepKind::Start,
        format!("Starting at {}", name(start)?),
        "Initialize distance to start node as 0, all others as infinity. \
         Add start node to priority queue."
            .to_string(),
        &state,
    );

    while let Some(entry) = state.frontier.pop() {
        let u = entry.node;
        if !state.settle(u) {
            tracing::trace!(node = %u, distance = entry.distance, "discarding stale frontier entry");
            continue;
        }

        let du = state.distance[u.index()];
        tracing::trace!(node = %u, distance = du, "settled");
        recorder.record(
            Some(u),
            StepKind::Visit,
            format!("Visiting {}", name(u)?),
            format!(
                "Selected {} as it has the minimum distance ({}m) among unvisited nodes. \
                 Mark it as visited.",
                name(u)?,
                du
            ),
            &state,
        );

        for v in (0..node_count as u32).map(NodeId) {
            let weight = graph.weight(u, v);
            if weight == 0 || state.is_visited(v) {
                continue;
            }
            if let Some(updated) = state.relax(u, v, weight) {
                recorder.record(
                    Some(u),
                    StepKind::Relax,
                    format!("Relaxing edge to {}", name(v)?),
                    format!(
                        "Found shorter path to {} via {}. Updated distance: {}m \
                         ({}m to {} + {}m edge).",
                        name(v)?,
                        name(u)?,
                        updated,
                        du,
                        name(u)?,
                        weight
                    ),
                    &state,
                );
            }
        }

        if u == end {
            recorder.record(
                Some(end),
                StepKind::Reached,
                format!("Reached destination: {}", name(end)?),
                format!("Found shortest path! Total distance: {}m", du),
                &state,
            );
            break;
        }
    }

    let path = state.reconstruct_path(start, end);
    let steps = recorder.into_steps();
    tracing::debug!(
        steps = steps.len(),
        reachable = !path.is_empty(),
        "dijkstra finished"
    );

    Ok(DijkstraRun {
        start,
        end,
        state,
        path,
        steps,
    })
}
