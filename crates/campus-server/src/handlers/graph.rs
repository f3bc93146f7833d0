//! Campus map handler.

use axum::extract::State;
use axum::Json;

use crate::schema::graph::GraphResponse;
use crate::state::AppState;

/// Returns every location and path.
///
/// `GET /api/graph`
pub async fn get_graph(State(state): State<AppState>) -> Json<GraphResponse> {
    Json(state.service.graph_view())
}
