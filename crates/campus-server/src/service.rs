//! CampusService: the operations behind every endpoint.
//!
//! Holds the read-only campus graph and converts raw request values into
//! core calls. Handlers own HTTP concerns; this layer owns id validation
//! and response assembly.

use std::sync::Arc;

use campus_core::{CampusGraph, NodeId};
use campus_route::{find_path, search_locations, sort_by_distance, SearchReport, SortReport};

use crate::error::ApiError;
use crate::schema::dijkstra::DijkstraResponse;
use crate::schema::graph::GraphResponse;

/// Service over a shared, immutable campus graph.
#[derive(Debug, Clone)]
pub struct CampusService {
    graph: Arc<CampusGraph>,
}

impl CampusService {
    pub fn new(graph: Arc<CampusGraph>) -> Self {
        CampusService { graph }
    }

    pub fn graph(&self) -> &CampusGraph {
        &self.graph
    }

    /// Converts a raw query value into a location id.
    ///
    /// Values that cannot be ids at all (negative, too large) are reported
    /// the same way as ids beyond the map.
    fn node_id(&self, raw: i64) -> Result<NodeId, ApiError> {
        u32::try_from(raw).map(NodeId).map_err(|_| {
            ApiError::NotFound(format!(
                "unknown location {}: the map has {} locations",
                raw,
                self.graph.node_count()
            ))
        })
    }

    /// The full map.
    pub fn graph_view(&self) -> GraphResponse {
        GraphResponse::from(self.graph.as_ref())
    }

    /// Traced shortest path between two locations.
    pub fn shortest_path(&self, start: i64, end: i64) -> Result<DijkstraResponse, ApiError> {
        let start = self.node_id(start)?;
        let end = self.node_id(end)?;
        let report = find_path(&self.graph, start, end)?;
        tracing::info!(
            %start,
            %end,
            distance = ?report.distance,
            steps = report.steps.len(),
            "computed shortest path"
        );
        Ok(DijkstraResponse::from(report))
    }

    /// Building search by name or category.
    pub fn search(&self, query: &str) -> SearchReport {
        search_locations(&self.graph, query)
    }

    /// Locations ranked by straight-line distance from `reference`.
    pub fn sort_by_distance(&self, reference: i64) -> Result<SortReport, ApiError> {
        let reference = self.node_id(reference)?;
        Ok(sort_by_distance(&self.graph, reference)?)
    }
}
