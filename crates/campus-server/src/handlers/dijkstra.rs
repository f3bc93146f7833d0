//! Shortest-path handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::schema::dijkstra::DijkstraResponse;
use crate::schema::params::{required, PathParams};
use crate::state::AppState;

/// Runs the traced shortest-path engine.
///
/// `GET /api/dijkstra?start=0&end=9`
pub async fn shortest_path(
    State(state): State<AppState>,
    params: Result<Query<PathParams>, QueryRejection>,
) -> Result<Json<DijkstraResponse>, ApiError> {
    let Query(params) = params?;
    tracing::debug!(?params, "dijkstra request");

    let start = required(params.start, "start")?;
    let end = required(params.end, "end")?;
    let response = state.service.shortest_path(start, end)?;
    Ok(Json(response))
}
