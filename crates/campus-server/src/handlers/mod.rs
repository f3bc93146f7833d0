//! HTTP handler modules for the campus API.
//!
//! Each sub-module implements thin handlers that decode query parameters,
//! delegate to [`crate::service::CampusService`], and return JSON responses.
//! No business logic lives in handlers.

pub mod dijkstra;
pub mod graph;
pub mod search;
pub mod sort;

use axum::http::StatusCode;
use axum::Json;

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Endpoint not found" })),
    )
}
