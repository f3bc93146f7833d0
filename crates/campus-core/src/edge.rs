//! Edge types for the campus graph.
//!
//! A [`Path`] is an undirected walking or driving connection between two
//! locations. The [`PathKind`] tag is descriptive and never changes the
//! weight.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// Surface of a campus path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Walkway,
    Road,
    Stairs,
}

impl PathKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PathKind::Walkway => "walkway",
            PathKind::Road => "road",
            PathKind::Stairs => "stairs",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An undirected, weighted connection between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub from: NodeId,
    pub to: NodeId,
    /// Length in meters. Always positive.
    pub weight: u32,
    #[serde(rename = "type")]
    pub kind: PathKind,
}
