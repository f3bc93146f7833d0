//! The predefined campus map served by the navigator.
//!
//! ```text
//!   Administration(0) -150- Library(1) -200- Main Gate(2) -180- Auditorium(3)
//!         |                    |                |                  |
//!        250                  220              200                160
//!         |                    |                |                  |
//!   Cafeteria(4) ==240== Hostel(5) -230- Parking Lot(6) -190- Football Ground(7)
//!                              \                /                  ||
//!                              210            180                 400
//!                                 \          /                     ||
//!                                  Garden(8) -------120------- Laboratory(9)
//! ```
//!
//! `==` marks roads, `-` walkways.

use crate::edge::PathKind;
use crate::error::CoreError;
use crate::graph::CampusGraph;
use crate::id::NodeId;

/// Number of locations on the campus map.
pub const CAMPUS_LOCATIONS: usize = 10;

const LOCATIONS: [(&str, f64, f64, &str); CAMPUS_LOCATIONS] = [
    ("Administration", 150.0, 150.0, "admin"),
    ("Library", 400.0, 150.0, "library"),
    ("Main Gate", 650.0, 150.0, "entrance"),
    ("Auditorium", 850.0, 150.0, "auditorium"),
    ("Cafeteria", 150.0, 350.0, "cafeteria"),
    ("Hostel", 400.0, 350.0, "hostel"),
    ("Parking Lot", 650.0, 350.0, "parking"),
    ("Football Ground", 850.0, 350.0, "sports"),
    ("Garden", 500.0, 550.0, "leisure"),
    ("Laboratory", 500.0, 650.0, "lab"),
];

const PATHS: [(u32, u32, u32, PathKind); 14] = [
    (0, 1, 150, PathKind::Walkway),
    (1, 2, 200, PathKind::Walkway),
    (2, 3, 180, PathKind::Walkway),
    (0, 4, 250, PathKind::Walkway),
    (1, 5, 220, PathKind::Walkway),
    (2, 6, 200, PathKind::Walkway),
    (3, 7, 160, PathKind::Walkway),
    (4, 5, 240, PathKind::Road),
    (5, 6, 230, PathKind::Walkway),
    (6, 7, 190, PathKind::Walkway),
    (5, 8, 210, PathKind::Walkway),
    (6, 8, 180, PathKind::Walkway),
    (8, 9, 120, PathKind::Walkway),
    (7, 9, 400, PathKind::Road),
];

/// Builds the campus map.
pub fn campus_graph() -> CampusGraph {
    build_campus().expect("predefined campus map satisfies graph invariants")
}

fn build_campus() -> Result<CampusGraph, CoreError> {
    let mut graph = CampusGraph::with_capacity(CAMPUS_LOCATIONS);
    for (id, (name, x, y, kind)) in LOCATIONS.iter().enumerate() {
        graph.add_node(NodeId(id as u32), name, *x, *y, kind)?;
    }
    for (from, to, weight, kind) in PATHS {
        graph.add_edge(NodeId(from), NodeId(to), weight, kind)?;
    }
    Ok(graph)
}
