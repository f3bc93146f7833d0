//! Route computations over the campus graph.
//!
//! - [`dijkstra`]: the step-recording shortest-path engine.
//! - [`report`]: assembly of engine runs into consumer-facing results.
//! - [`search`]: building search by name or category.
//! - [`sort`]: locations ranked by straight-line distance.

pub mod dijkstra;
pub mod error;
pub mod report;
pub mod search;
pub mod sort;

pub use dijkstra::{find_path, StepKind};
pub use error::RouteError;
pub use report::{Complexity, PathReport, StepReport};
pub use search::{search_locations, SearchReport};
pub use sort::{sort_by_distance, RankedLocation, SortReport};
