//! Stable ID newtype for campus locations.
//!
//! Location ids are a dense range `0..N` and double as row/column indices
//! into the adjacency matrix, so [`NodeId`] converts cheaply to `usize`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense location identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Returns the id as a matrix/vector index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
