// #![warn(missing_docs)]

//! # weighted_graphs
//!
//! Weighted graphs keyed by arbitrary node keys, with the classic algorithms:
//! - single-source shortest paths, by linear scan or by binary heap,
//! - Kruskal's minimum spanning tree on top of a union-find,
//! - depth-first traversal,
//! - cycle detection and topological sort for directed graphs.
//!
//! [`GraphMap`] is a map-backed alternative that keeps one edge per pair.
//!
//! Graphs are [`UnGraph`] (every edge stored at both ends) or [`DiGraph`]. The
//! edge type markers come from [`petgraph`](https://docs.rs/petgraph), and
//! [`Graph::to_petgraph`] hands a graph over to that ecosystem.
//!
//! ```
//! use weighted_graphs::UnGraph;
//!
//! let mut g = UnGraph::new();
//! g.add_node("A");
//! g.add_node("B");
//! g.add_node("C");
//! g.add_edge("A", "B", 5);
//! g.add_edge("A", "C", 10);
//!
//! let from_b = g.shortest_paths_heap("B").unwrap();
//! assert_eq!(from_b.get("C"), Some(15));
//! assert_eq!(g.minimum_spanning_tree().total_weight(), 15);
//! ```

pub mod error;
pub mod graph;
pub mod graph_map;
pub mod input;
pub mod mst;
pub mod output;
pub mod shortest_path;
pub mod testing;
pub mod traversal;
pub mod types;
pub mod union_find;
pub mod visualize;

pub use error::{GraphError, Result};
pub use graph::{Graph, Neighbors};
pub use graph_map::GraphMap;
pub use input::from_file;
pub use mst::SpanningForest;
pub use shortest_path::Distances;
pub use types::{
    DEFAULT_WEIGHT, DiGraph, Directed, EdgeType, INFINITY, NodeKey, Recursion, ShortestPathStrategy,
    UnGraph, Undirected, Weight,
};
pub use union_find::UnionFind;
