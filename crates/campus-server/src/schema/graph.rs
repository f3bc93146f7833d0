//! Campus map response.

use campus_core::{CampusGraph, Location, Path};
use serde::Serialize;

/// Full map: `{nodes: [{id, name, x, y, type}], edges: [{from, to, weight, type}]}`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphResponse {
    pub nodes: Vec<Location>,
    pub edges: Vec<Path>,
}

impl From<&CampusGraph> for GraphResponse {
    fn from(graph: &CampusGraph) -> Self {
        GraphResponse {
            nodes: graph.locations().to_vec(),
            edges: graph.paths().to_vec(),
        }
    }
}
