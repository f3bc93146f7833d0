//! API schema types for request/response definitions.
//!
//! Search and sort reports from `campus-route` already serialize in their
//! wire shape and are returned as-is; the modules here cover the map view,
//! the shortest-path response, and query parameters.

pub mod dijkstra;
pub mod graph;
pub mod params;
