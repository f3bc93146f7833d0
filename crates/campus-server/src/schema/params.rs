//! Query-string parameters.
//!
//! Every field is optional so a missing parameter surfaces as a descriptive
//! `400` instead of a generic deserialization failure.

use serde::Deserialize;

use crate::error::ApiError;

/// `GET /api/dijkstra?start=0&end=9`
#[derive(Debug, Clone, Deserialize)]
pub struct PathParams {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// `GET /api/search?query=Main+Gate`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// `GET /api/sort?reference=0`
#[derive(Debug, Clone, Deserialize)]
pub struct SortParams {
    pub reference: Option<i64>,
}

/// Unwraps a required parameter.
pub fn required<T>(value: Option<T>, name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::BadRequest(format!("missing query parameter '{}'", name)))
}
