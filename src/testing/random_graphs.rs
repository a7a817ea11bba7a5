use crate::types::{DiGraph, UnGraph, Weight};
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand::rngs::StdRng;

/// Connected undirected graph on nodes `0..n` with `m` edges (at least `n - 1`).
///
/// A random tree is built first, the remaining edges join arbitrary pairs, so
/// self-loops and multi-edges can appear. Weights are drawn from `1..=max_weight`.
pub fn random_graph(n: usize, m: usize, max_weight: Weight, seed: usize) -> UnGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = UnGraph::with_capacity(n);

    for i in 0..n {
        graph.add_node(i);
        if i > 0 {
            let j = rng.random_range(0..i);
            graph.add_edge(&i, &j, rng.random_range(1..=max_weight));
        }
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        graph.add_edge(&s, &t, rng.random_range(1..=max_weight));
    }

    graph
}

/// Directed graph on nodes `0..n` with `m` uniformly random edges. May contain cycles.
pub fn random_digraph(n: usize, m: usize, max_weight: Weight, seed: usize) -> DiGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = DiGraph::with_capacity(n);

    for i in 0..n {
        graph.add_node(i);
    }
    for _ in 0..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        graph.add_edge(&s, &t, rng.random_range(1..=max_weight));
    }

    graph
}

/// Directed acyclic graph with `m` unit edges.
///
/// Nodes are inserted in a shuffled order and every edge goes from the lower to
/// the higher number, so insertion order is not a topological order.
pub fn random_dag(n: usize, m: usize, seed: usize) -> DiGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = DiGraph::with_capacity(n);

    let mut nodes: Vec<usize> = (0..n).collect();
    nodes.shuffle(&mut rng);
    for node in nodes {
        graph.add_node(node);
    }

    if n < 2 {
        return graph;
    }
    for _ in 0..m {
        let s = rng.random_range(0..n - 1);
        let t = rng.random_range(s + 1..n);
        graph.add_unit_edge(&s, &t);
    }

    graph
}
