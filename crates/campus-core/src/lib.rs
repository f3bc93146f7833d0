//! Graph data model for the campus navigator.
//!
//! Provides the dense, immutable-after-construction [`CampusGraph`] together
//! with its location and path types, and the predefined campus map.

pub mod campus;
pub mod edge;
pub mod error;
pub mod graph;
pub mod id;
pub mod node;

// Re-export commonly used types
pub use campus::campus_graph;
pub use edge::{Path, PathKind};
pub use error::CoreError;
pub use graph::CampusGraph;
pub use id::NodeId;
pub use node::Location;
