//! Application state shared by all handlers.
//!
//! The campus graph never changes after startup, so the service is shared
//! through an `Arc` without any lock. Every request builds its own algorithm
//! state inside the core.

use std::sync::Arc;

use campus_core::{campus_graph, CampusGraph};

use crate::service::CampusService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CampusService>,
}

impl AppState {
    /// State serving the given graph.
    pub fn new(graph: CampusGraph) -> Self {
        AppState {
            service: Arc::new(CampusService::new(Arc::new(graph))),
        }
    }

    /// State serving the predefined campus map.
    pub fn campus() -> Self {
        AppState::new(campus_graph())
    }
}
