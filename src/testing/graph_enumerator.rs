use crate::types::{NodeKey, UnGraph, Weight};
use crate::union_find::UnionFind;

/// Brute-force enumeration of every spanning tree of a small graph.
///
/// Walks all `2^m` subsets of the logical edge list and yields those with
/// `n - 1` edges that connect every node. Parallel edges count as different
/// trees. Only meant for checking Kruskal on graphs with a handful of edges.
pub struct SpanningTreeEnumerator<'a, K> {
    graph: &'a UnGraph<K>,
    edges: Vec<(&'a K, &'a K, Weight)>,
    endpoints: Vec<(usize, usize)>,
    mask: u64,
    last_mask: u64,
}

impl<'a, K: NodeKey> SpanningTreeEnumerator<'a, K> {
    pub fn new(graph: &'a UnGraph<K>) -> Self {
        let edges = graph.edges();
        assert!(edges.len() < 64, "too many edges to enumerate");
        let position = |k: &K| graph.index_of(k).expect("edge endpoints are nodes");
        let endpoints = edges.iter().map(|&(u, v, _)| (position(u), position(v))).collect();
        let last_mask = 1u64 << edges.len();
        Self {
            graph,
            edges,
            endpoints,
            mask: 0,
            last_mask,
        }
    }

    fn is_spanning_tree(&self, mask: u64) -> bool {
        let n = self.graph.node_count();
        if mask.count_ones() as usize + 1 != n {
            return false;
        }
        let mut sets = UnionFind::new(n);
        for (i, &(u, v)) in self.endpoints.iter().enumerate() {
            if mask & (1 << i) != 0 && !sets.union(u, v) {
                return false;
            }
        }
        true
    }
}

impl<'a, K: NodeKey> Iterator for SpanningTreeEnumerator<'a, K> {
    type Item = Vec<(&'a K, &'a K, Weight)>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.mask < self.last_mask {
            let mask = self.mask;
            self.mask += 1;
            if self.is_spanning_tree(mask) {
                let tree = (0..self.edges.len())
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| self.edges[i])
                    .collect();
                return Some(tree);
            }
        }
        None
    }
}
