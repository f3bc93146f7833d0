//! Router assembly for the campus HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive (the visualization front end is served elsewhere).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/graph", get(handlers::graph::get_graph))
        .route("/api/dijkstra", get(handlers::dijkstra::shortest_path))
        .route("/api/search", get(handlers::search::search))
        .route("/api/sort", get(handlers::sort::sort_by_distance))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
