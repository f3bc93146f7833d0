//! HTTP/JSON API server for the campus navigator.
//!
//! Exposes the campus map, traced shortest paths, building search and
//! distance sorting. Handlers are thin: they decode query parameters,
//! delegate to [`service::CampusService`], and serialize the wire format
//! defined in [`schema`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
