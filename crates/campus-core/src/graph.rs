//! CampusGraph: the weighted undirected map of campus locations.
//!
//! [`CampusGraph`] stores locations in a dense vector indexed by [`NodeId`],
//! paths in an edge list, and a symmetric square adjacency matrix of weights
//! for O(1) weight queries. A weight of `0` in the matrix means "no path",
//! which is why zero-weight paths are rejected at construction.
//!
//! The graph is built once and then only read. Nothing exposes mutable
//! access after construction, so an `Arc<CampusGraph>` can be shared freely
//! between concurrent path computations.

use std::collections::HashMap;

use crate::edge::{Path, PathKind};
use crate::error::CoreError;
use crate::id::NodeId;
use crate::node::Location;

/// The campus map.
#[derive(Debug, Clone)]
pub struct CampusGraph {
    /// Locations indexed by id.
    locations: Vec<Location>,
    /// Paths in insertion order.
    paths: Vec<Path>,
    /// `capacity x capacity` weights, `0` = not adjacent.
    adjacency: Vec<Vec<u32>>,
    /// Secondary lookup key.
    name_to_id: HashMap<String, NodeId>,
}

impl CampusGraph {
    /// Creates an empty graph whose adjacency matrix is pre-sized for
    /// `capacity` locations.
    pub fn with_capacity(capacity: usize) -> Self {
        CampusGraph {
            locations: Vec::with_capacity(capacity),
            paths: Vec::new(),
            adjacency: vec![vec![0; capacity]; capacity],
            name_to_id: HashMap::with_capacity(capacity),
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Registers a location.
    ///
    /// Ids must be assigned contiguously from 0 and stay within the capacity
    /// given to [`CampusGraph::with_capacity`]. Names must be unique.
    pub fn add_node(
        &mut self,
        id: NodeId,
        name: &str,
        x: f64,
        y: f64,
        kind: &str,
    ) -> Result<NodeId, CoreError> {
        if id.index() >= self.capacity() {
            return Err(CoreError::InvalidNode {
                id,
                reason: format!("id exceeds graph capacity {}", self.capacity()),
            });
        }
        if id.index() != self.locations.len() {
            return Err(CoreError::InvalidNode {
                id,
                reason: format!("expected next id {}", self.locations.len()),
            });
        }
        if self.name_to_id.contains_key(name) {
            return Err(CoreError::DuplicateName {
                name: name.to_string(),
            });
        }

        self.locations.push(Location::new(id, name, x, y, kind));
        self.name_to_id.insert(name.to_string(), id);
        Ok(id)
    }

    /// Connects two registered locations with an undirected path.
    ///
    /// Rejects unknown endpoints, self-loops and zero weight. Adding a second
    /// path between the same pair overwrites the matrix weight and appends
    /// another entry to the edge list.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: u32,
        kind: PathKind,
    ) -> Result<(), CoreError> {
        let invalid = |reason: String| CoreError::InvalidEdge { from, to, reason };

        for endpoint in [from, to] {
            if !self.contains(endpoint) {
                return Err(invalid(format!("node {} is not registered", endpoint)));
            }
        }
        if from == to {
            return Err(invalid("self-loops are not allowed".to_string()));
        }
        if weight == 0 {
            return Err(invalid("weight must be positive".to_string()));
        }

        self.adjacency[from.index()][to.index()] = weight;
        self.adjacency[to.index()][from.index()] = weight;
        self.paths.push(Path {
            from,
            to,
            weight,
            kind,
        });
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Returns the weight between two locations, or `0` if they are not
    /// adjacent (or either id is unknown).
    pub fn weight(&self, from: NodeId, to: NodeId) -> u32 {
        self.adjacency
            .get(from.index())
            .and_then(|row| row.get(to.index()))
            .copied()
            .unwrap_or(0)
    }

    /// Returns every location adjacent to `node`, ascending by id.
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        (0..self.node_count() as u32)
            .map(NodeId)
            .filter(|&other| self.weight(node, other) > 0)
            .collect()
    }

    /// Number of registered locations.
    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of paths in the edge list.
    pub fn edge_count(&self) -> usize {
        self.paths.len()
    }

    /// Pre-sized bound on location ids.
    pub fn capacity(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if `id` refers to a registered location.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.locations.len()
    }

    /// Returns the location with the given id.
    pub fn location(&self, id: NodeId) -> Result<&Location, CoreError> {
        self.locations
            .get(id.index())
            .ok_or(CoreError::NodeNotFound {
                id,
                node_count: self.node_count(),
            })
    }

    /// All locations, ascending by id.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All paths in insertion order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Exact name lookup.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }
}
