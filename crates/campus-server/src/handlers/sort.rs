//! Distance sort handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use campus_route::SortReport;

use crate::error::ApiError;
use crate::schema::params::{required, SortParams};
use crate::state::AppState;

/// Ranks locations by straight-line distance from a reference location.
///
/// `GET /api/sort?reference=0`
pub async fn sort_by_distance(
    State(state): State<AppState>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> Result<Json<SortReport>, ApiError> {
    let Query(params) = params?;
    tracing::debug!(?params, "sort request");

    let reference = required(params.reference, "reference")?;
    Ok(Json(state.service.sort_by_distance(reference)?))
}
