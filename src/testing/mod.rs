//! Graph generators used by the tests and the timing demos.

pub mod graph_enumerator;
pub mod grids;
pub mod random_graphs;
