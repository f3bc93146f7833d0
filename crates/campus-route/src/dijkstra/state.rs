//! Mutable algorithm state for one shortest-path run.
//!
//! [`AlgorithmState`] is created per invocation and never shared. The
//! frontier is a binary min-heap with lazy deletion: a node may have several
//! entries, and entries for already visited nodes are dropped when popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use campus_core::NodeId;

/// Sentinel for "no path found yet".
pub const INFINITY: u64 = u64::MAX;

/// A `(distance, node)` candidate on the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub distance: u64,
    pub node: NodeId,
}

// BinaryHeap is a max-heap, so the ordering is reversed: the smallest
// (distance, node) pair has the highest priority.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority frontier of discovered candidates.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn push(&mut self, distance: u64, node: NodeId) {
        self.heap.push(FrontierEntry { distance, node });
    }

    /// Removes the entry with the smallest `(distance, node)`.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Node ids of every entry, stale ones included, in pop order.
    pub fn snapshot(&self) -> Vec<NodeId> {
        let mut entries: Vec<FrontierEntry> = self.heap.iter().copied().collect();
        entries.sort_by_key(|entry| (entry.distance, entry.node));
        entries.into_iter().map(|entry| entry.node).collect()
    }
}

/// Distances, visited flags, predecessors and frontier of a run.
#[derive(Debug)]
pub struct AlgorithmState {
    pub distance: Vec<u64>,
    pub visited: Vec<bool>,
    pub predecessor: Vec<Option<NodeId>>,
    pub frontier: Frontier,
}

impl AlgorithmState {
    /// Initial state: only `start` is reached, at distance 0, and it is the
    /// sole frontier entry.
    pub fn new(node_count: usize, start: NodeId) -> Self {
        let mut state = AlgorithmState {
            distance: vec![INFINITY; node_count],
            visited: vec![false; node_count],
            predecessor: vec![None; node_count],
            frontier: Frontier::default(),
        };
        state.distance[start.index()] = 0;
        state.frontier.push(0, start);
        state
    }

    /// Marks `node` as finalized. Returns `false` if it already was, which
    /// means the popped frontier entry was stale.
    pub fn settle(&mut self, node: NodeId) -> bool {
        let visited = &mut self.visited[node.index()];
        if *visited {
            return false;
        }
        *visited = true;
        true
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited[node.index()]
    }

    pub fn distance_to(&self, node: NodeId) -> Option<u64> {
        match self.distance[node.index()] {
            INFINITY => None,
            d => Some(d),
        }
    }

    /// Tries to improve `to` through the edge `from -> to`.
    ///
    /// On improvement the distance and predecessor are updated, a new
    /// frontier entry is pushed, and the new distance is returned.
    pub fn relax(&mut self, from: NodeId, to: NodeId, weight: u32) -> Option<u64> {
        let base = self.distance[from.index()];
        if base == INFINITY {
            return None;
        }
        let candidate = base.saturating_add(u64::from(weight));
        if candidate >= self.distance[to.index()] {
            return None;
        }
        self.distance[to.index()] = candidate;
        self.predecessor[to.index()] = Some(from);
        self.frontier.push(candidate, to);
        Some(candidate)
    }

    /// Walks predecessor links back from `end`. Empty when `end` was never
    /// reached.
    pub fn reconstruct_path(&self, start: NodeId, end: NodeId) -> Vec<NodeId> {
        if self.distance_to(end).is_none() {
            return Vec::new();
        }
        let mut path = vec![end];
        let mut current = end;
        while current != start {
            match self.predecessor[current.index()] {
                // Predecessor chains are acyclic; the bound guards against
                // a corrupted state looping forever.
                Some(prev) if path.len() <= self.distance.len() => {
                    path.push(prev);
                    current = prev;
                }
                _ => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}
