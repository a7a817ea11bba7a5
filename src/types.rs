use std::fmt::Debug;
use std::hash::Hash;

pub use petgraph::{Directed, EdgeType, Undirected};

/// Weight of a single edge. Weights are non-negative by construction.
pub type Weight = u32;

/// Weight used when an edge is declared without one.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Path cost of a node that cannot be reached from the source.
pub const INFINITY: u64 = u64::MAX;

/// Anything that can identify a node: hashable, comparable, cloneable and printable.
pub trait NodeKey: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> NodeKey for T {}

/// Undirected weighted graph. Every edge is stored in both endpoints' adjacency lists.
pub type UnGraph<K> = crate::graph::Graph<K, Undirected>;

/// Directed weighted graph. An edge is stored only in its source's adjacency list.
pub type DiGraph<K> = crate::graph::Graph<K, Directed>;

/// Selects how Dijkstra picks the next node to finalize.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ShortestPathStrategy {
    /// Scan the whole frontier every step, O(V^2).
    LinearScan,
    /// Binary heap with stale entries skipped on pop, O((E+V) log V).
    #[default]
    PriorityQueue,
}

/// Selects how depth-first routines are executed.
///
/// Both produce the same orders. `Recursive` uses the call stack and may overflow
/// on long paths, `Iterative` keeps its frames on the heap.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Recursion {
    #[default]
    Iterative,
    Recursive,
}

impl std::fmt::Display for ShortestPathStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortestPathStrategy::LinearScan => f.pad("LinearScan"),
            ShortestPathStrategy::PriorityQueue => f.pad("PriorityQueue"),
        }
    }
}

impl std::fmt::Display for Recursion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recursion::Iterative => f.pad("Iterative"),
            Recursion::Recursive => f.pad("Recursive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("[{:>14}]", ShortestPathStrategy::LinearScan), "[    LinearScan]");
        assert_eq!(format!("[{:<9}]", Recursion::Iterative), "[Iterative]");
        assert_eq!(format!("[{:>11}]", Recursion::Recursive), "[  Recursive]");
        assert_eq!(ShortestPathStrategy::default().to_string(), "PriorityQueue");
    }
}
