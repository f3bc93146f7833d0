//! Error types for route computations.
//!
//! Only precondition violations are errors. An unreachable destination is a
//! regular outcome reported through [`crate::PathReport::distance`].

use campus_core::{CampusGraph, CoreError, NodeId};

/// Errors produced by the route engine and the auxiliary views.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    /// A caller-supplied id is outside `0..node_count`.
    #[error("unknown location {id}: the map has {node_count} locations")]
    UnknownNode { id: NodeId, node_count: usize },

    #[error(transparent)]
    Graph(#[from] CoreError),
}

/// Fails fast when `id` is not a location of `graph`.
pub(crate) fn ensure_node(graph: &CampusGraph, id: NodeId) -> Result<(), RouteError> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(RouteError::UnknownNode {
            id,
            node_count: graph.node_count(),
        })
    }
}
