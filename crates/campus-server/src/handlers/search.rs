//! Building search handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use campus_route::SearchReport;

use crate::error::ApiError;
use crate::schema::params::{required, SearchParams};
use crate::state::AppState;

/// Searches locations by name or category.
///
/// `GET /api/search?query=Library`
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchReport>, ApiError> {
    let Query(params) = params?;
    tracing::debug!(?params, "search request");

    let query = required(params.query, "query")?;
    Ok(Json(state.service.search(&query)))
}
