//! Step trace recording for the shortest-path engine.
//!
//! Every meaningful transition of a run is captured as a [`TraceStep`]
//! holding value copies of the algorithm state at that instant. Later
//! mutations of the live state never reach a recorded step.

use campus_core::NodeId;
use serde::Serialize;

use super::state::AlgorithmState;

/// Which transition a step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Initialization of distances and the frontier.
    Start,
    /// A node was popped and finalized.
    Visit,
    /// A neighbor's distance was improved.
    Relax,
    /// The destination was finalized and the run stops.
    Reached,
}

/// A point-in-time snapshot of one algorithm step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    /// Sequence number, starting at 0 with no gaps.
    pub step: usize,
    /// Node acted on; `None` for the initialization step.
    pub node: Option<NodeId>,
    pub kind: StepKind,
    /// Short label, e.g. "Visiting Library".
    pub action: String,
    /// Why this transition happened.
    pub explanation: String,
    pub visited: Vec<bool>,
    /// Raw distances; unreached nodes hold [`super::state::INFINITY`].
    pub distances: Vec<u64>,
    pub previous: Vec<Option<NodeId>>,
    /// Frontier node ids in pop order.
    pub queue: Vec<NodeId>,
}

/// Append-only list of trace steps.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<TraceStep>,
}

impl TraceRecorder {
    pub fn record(
        &mut self,
        node: Option<NodeId>,
        kind: StepKind,
        action: String,
        explanation: String,
        state: &AlgorithmState,
    ) {
        self.steps.push(TraceStep {
            step: self.steps.len(),
            node,
            kind,
            action,
            explanation,
            visited: state.visited.clone(),
            distances: state.distance.clone(),
            previous: state.predecessor.clone(),
            queue: state.frontier.snapshot(),
        });
    }

    pub fn into_steps(self) -> Vec<TraceStep> {
        self.steps
    }
}
