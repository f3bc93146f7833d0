//! Core error types for campus-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! construction of the campus graph and lookups against it.

use crate::id::NodeId;
use thiserror::Error;

/// Core errors produced by the campus-core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A node id does not refer to a registered location.
    #[error("node not found: NodeId({id}) (graph has {node_count} nodes)", id = id.0)]
    NodeNotFound { id: NodeId, node_count: usize },

    /// A node could not be registered.
    #[error("invalid node NodeId({id}): {reason}", id = id.0)]
    InvalidNode { id: NodeId, reason: String },

    /// Attempting to register a location name that already exists.
    #[error("duplicate location name: '{name}'")]
    DuplicateName { name: String },

    /// An edge failed validation.
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: NodeId,
        to: NodeId,
        reason: String,
    },
}
