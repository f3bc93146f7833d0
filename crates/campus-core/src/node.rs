//! Campus locations: the vertices of the campus graph.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// A named place on the campus map.
///
/// The coordinates are layout positions for rendering the map. The shortest
/// path engine never reads them; the distance-sort view does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: NodeId,
    /// Display name, unique within a graph.
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Free-form category tag ("admin", "library", "parking", ...).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Location {
    pub fn new(
        id: NodeId,
        name: impl Into<String>,
        x: f64,
        y: f64,
        kind: impl Into<String>,
    ) -> Self {
        Location {
            id,
            name: name.into(),
            x,
            y,
            kind: kind.into(),
        }
    }

    /// Straight-line distance between the layout positions of two locations.
    pub fn straight_line_distance(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
