//! Map-backed undirected graph.
//!
//! Every node owns a neighbor map, so a pair of nodes holds at most one edge and
//! adding it again replaces the weight. Neighbors keep the order in which they
//! were first connected, which is also the order [`GraphMap::dfs`] explores them.
//!
//! Compared to [`crate::UnGraph`] this trades multi-edges for O(1) weight lookup
//! and in-place updates.

use crate::error::{GraphError, Result};
use crate::graph::Neighbors;
use crate::traversal::{preorder_iterative, preorder_recursive};
use crate::types::{DEFAULT_WEIGHT, NodeKey, Recursion, UnGraph, Weight};
use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

/// Insertion-ordered map from neighbor position to weight.
#[derive(Clone, Debug, Default)]
struct NeighborMap {
    slots: HashMap<usize, usize>,
    entries: Vec<(usize, Weight)>,
}

impl NeighborMap {
    /// Returns the replaced weight if `v` was already a neighbor.
    fn insert(&mut self, v: usize, weight: Weight) -> Option<Weight> {
        match self.slots.get(&v) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, weight)),
            None => {
                self.slots.insert(v, self.entries.len());
                self.entries.push((v, weight));
                None
            }
        }
    }

    fn remove(&mut self, v: usize) -> Option<Weight> {
        let slot = self.slots.remove(&v)?;
        let (_, weight) = self.entries.remove(slot);
        for s in self.slots.values_mut() {
            if *s > slot {
                *s -= 1;
            }
        }
        Some(weight)
    }

    fn get(&self, v: usize) -> Option<Weight> {
        self.slots.get(&v).map(|&slot| self.entries[slot].1)
    }

    /// Shifts neighbor positions above `removed` down by one.
    fn renumber(&mut self, removed: usize) {
        for (v, _) in self.entries.iter_mut() {
            if *v > removed {
                *v -= 1;
            }
        }
        self.slots = self.entries.iter().enumerate().map(|(slot, &(v, _))| (v, slot)).collect();
    }
}

impl AsRef<[(usize, Weight)]> for NeighborMap {
    fn as_ref(&self) -> &[(usize, Weight)] {
        &self.entries
    }
}

#[derive(Clone, Debug)]
pub struct GraphMap<K> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
    adjacency: Vec<NeighborMap>,
}

impl<K: NodeKey> Default for GraphMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKey> GraphMap<K> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    /// Number of connected pairs. A self-loop is a single entry and counts once.
    pub fn edge_count(&self) -> usize {
        let mut entries = 0;
        let mut self_loops = 0;
        for (u, map) in self.adjacency.iter().enumerate() {
            entries += map.entries.len();
            if map.get(u).is_some() {
                self_loops += 1;
            }
        }
        (entries + self_loops) / 2
    }

    pub fn contains_node<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Returns `false` if the key already exists.
    pub fn add_node(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            tracing::trace!(key = ?key, "add_node: already exists");
            return false;
        }
        self.index.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        self.adjacency.push(NeighborMap::default());
        true
    }

    /// Removes a node and its entry in every other node's map.
    pub fn remove_node<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(removed) = self.index.remove(key) else {
            tracing::trace!("remove_node: no such node");
            return false;
        };

        self.keys.remove(removed);
        self.adjacency.remove(removed);
        for map in self.adjacency.iter_mut() {
            map.remove(removed);
            map.renumber(removed);
        }
        for position in self.index.values_mut() {
            if *position > removed {
                *position -= 1;
            }
        }
        true
    }

    /// Connects `from` and `to`, replacing the weight if they are already connected.
    ///
    /// Returns `false` without changing anything if either endpoint is absent.
    pub fn add_edge<Q>(&mut self, from: &Q, to: &Q, weight: Weight) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(&u), Some(&v)) = (self.index.get(from), self.index.get(to)) else {
            tracing::trace!("add_edge: missing endpoint");
            return false;
        };
        self.adjacency[u].insert(v, weight);
        self.adjacency[v].insert(u, weight);
        true
    }

    pub fn add_unit_edge<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Disconnects the pair and returns the weight it had, `None` if it was not connected.
    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q) -> Option<Weight>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (&u, &v) = (self.index.get(from)?, self.index.get(to)?);
        let weight = self.adjacency[u].remove(v)?;
        self.adjacency[v].remove(u);
        Some(weight)
    }

    pub fn weight<Q>(&self, from: &Q, to: &Q) -> Option<Weight>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (&u, &v) = (self.index.get(from)?, self.index.get(to)?);
        self.adjacency[u].get(v)
    }

    /// Neighbors of `key` as `(neighbor, weight)` in first-connection order.
    pub fn neighbors<Q>(&self, key: &Q) -> Result<Neighbors<'_, K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        let u = self.index_of(key)?;
        Ok(Neighbors::new(&self.keys, &self.adjacency[u].entries))
    }

    pub fn degree<Q>(&self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        Ok(self.adjacency[self.index_of(key)?].entries.len())
    }

    /// Nodes reachable from `start` in depth-first pre-order.
    pub fn dfs<Q>(&self, start: &Q) -> Result<Vec<&K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        self.dfs_with(start, Recursion::default())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.node_count(), mode = %mode))]
    pub fn dfs_with<Q>(&self, start: &Q, mode: Recursion) -> Result<Vec<&K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        let s = self.index_of(start)?;
        let mut visited = FixedBitSet::with_capacity(self.node_count());
        let mut order = Vec::new();
        match mode {
            Recursion::Iterative => preorder_iterative(&self.adjacency, s, &mut visited, &mut order),
            Recursion::Recursive => preorder_recursive(&self.adjacency, s, &mut visited, &mut order),
        }
        Ok(order.into_iter().map(|u| &self.keys[u]).collect())
    }

    fn index_of<Q>(&self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::not_found(key))
    }
}

/// Copies a list-backed graph. Parallel edges collapse to the one added last.
impl<K: NodeKey> From<&UnGraph<K>> for GraphMap<K> {
    fn from(graph: &UnGraph<K>) -> Self {
        let mut map = GraphMap::new();
        for key in graph.nodes() {
            map.add_node(key.clone());
        }
        // both halves of every edge are stored, so each side is filled from its own list
        for (u, list) in graph.adjacency().iter().enumerate() {
            for &(v, weight) in list {
                map.adjacency[u].insert(v, weight);
            }
        }
        map
    }
}

impl GraphMap<String> {
    /// Replaces the content with the parsed text, see [`crate::input::from_str`].
    ///
    /// A repeated edge line overwrites the earlier weight. On error the graph is
    /// left as it was.
    pub fn import_from_str(&mut self, input: &str) -> Result<()> {
        let graph: UnGraph<String> = crate::input::from_str(input)?;
        *self = GraphMap::from(&graph);
        Ok(())
    }

    pub fn import_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let graph: UnGraph<String> = crate::input::from_file(path)?;
        *self = GraphMap::from(&graph);
        Ok(())
    }
}

impl<K: NodeKey + Display> Display for GraphMap<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (u, node) in self.keys.iter().enumerate() {
            writeln!(f, "Node {} connects to:", node)?;
            for &(v, weight) in &self.adjacency[u].entries {
                writeln!(f, "  {} with weight {}", self.keys[v], weight)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_graphs::random_graph;

    fn abc() -> GraphMap<&'static str> {
        let mut g = GraphMap::new();
        for k in ["A", "B", "C"] {
            g.add_node(k);
        }
        g.add_edge("A", "B", 5);
        g.add_edge("A", "C", 10);
        g
    }

    fn neighbor_list(g: &GraphMap<&'static str>, key: &str) -> Vec<(&'static str, Weight)> {
        g.neighbors(key).unwrap().map(|(k, w)| (*k, w)).collect()
    }

    fn assert_consistent(g: &GraphMap<&'static str>) {
        assert_eq!(g.keys.len(), g.adjacency.len());
        for (i, k) in g.keys.iter().enumerate() {
            assert_eq!(g.index[k], i);
        }
        for map in &g.adjacency {
            assert_eq!(map.slots.len(), map.entries.len());
            for (slot, &(v, _)) in map.entries.iter().enumerate() {
                assert!(v < g.keys.len());
                assert_eq!(map.slots[&v], slot);
            }
        }
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut g = abc();
        assert!(g.add_edge("B", "A", 7));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight("A", "B"), Some(7));
        assert_eq!(neighbor_list(&g, "A"), vec![("B", 7), ("C", 10)]);
        assert_eq!(neighbor_list(&g, "B"), vec![("A", 7)]);
    }

    #[test]
    fn test_add_edge_missing_endpoint() {
        let mut g = abc();
        assert!(!g.add_edge("A", "Z", 1));
        assert!(!g.add_node("A"));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_remove_edge_deletes_one_pair() {
        let mut g = abc();
        assert_eq!(g.remove_edge("C", "A"), Some(10));
        assert_eq!(g.remove_edge("C", "A"), None);
        assert_eq!(g.remove_edge("A", "Z"), None);
        assert_eq!(neighbor_list(&g, "A"), vec![("B", 5)]);
        assert!(neighbor_list(&g, "C").is_empty());
        assert_consistent(&g);
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut g = abc();
        g.add_node("D");
        g.add_edge("C", "D", 7);
        g.add_edge("D", "B", 2);

        assert!(g.remove_node("A"));
        assert!(!g.contains_node("A"));
        assert_consistent(&g);
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec!["B", "C", "D"]);
        assert_eq!(neighbor_list(&g, "B"), vec![("D", 2)]);
        assert_eq!(neighbor_list(&g, "D"), vec![("C", 7), ("B", 2)]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight("D", "C"), Some(7));
        assert!(!g.remove_node("A"));
    }

    #[test]
    fn test_self_loop_is_one_entry() {
        let mut g = GraphMap::new();
        g.add_node('a');
        g.add_edge(&'a', &'a', 3);
        g.add_edge(&'a', &'a', 4);
        assert_eq!(g.degree(&'a').unwrap(), 1);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.remove_edge(&'a', &'a'), Some(4));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_dfs_first_connection_order() {
        let mut g = abc();
        g.add_node("D");
        g.add_edge("C", "D", 1);
        g.add_edge("A", "B", 1);
        for mode in [Recursion::Iterative, Recursion::Recursive] {
            assert_eq!(g.dfs_with("A", mode).unwrap(), vec![&"A", &"B", &"C", &"D"]);
        }
        assert!(matches!(g.dfs("Z"), Err(GraphError::NodeNotFound { .. })));
    }

    #[test]
    fn test_from_graph_collapses_parallel_edges() {
        let mut list: UnGraph<&'static str> = UnGraph::new();
        for k in ["A", "B"] {
            list.add_node(k);
        }
        list.add_edge("A", "B", 9);
        list.add_edge("B", "A", 4);
        let g = GraphMap::from(&list);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight("A", "B"), Some(4));
        assert_eq!(g.weight("B", "A"), Some(4));
    }

    #[test]
    fn test_dfs_matches_list_store() {
        for seed in 0..10 {
            let list = random_graph(50, 140, 9, seed);
            let map = GraphMap::from(&list);
            for start in [0usize, 25, 49] {
                assert_eq!(map.dfs(&start).unwrap(), list.dfs(&start).unwrap(), "seed {seed}");
            }
        }
    }

    #[test]
    fn test_import_overwrites_repeated_edge() {
        let mut g: GraphMap<String> = GraphMap::new();
        g.import_from_str("strict graph {\nA -- B [weight=5];\nB -- A [weight=2];\nA -- C [];\n}")
            .unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight("A", "B"), Some(2));
        assert_eq!(g.weight("A", "C"), Some(1));

        assert!(g.import_from_str("graph {\nX -- Y [];\n}").is_err());
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_display() {
        let mut g = GraphMap::new();
        g.add_node("A");
        g.add_node("B");
        g.add_edge("A", "B", 5);
        g.add_edge("A", "B", 6);
        assert_eq!(
            g.to_string(),
            "Node A connects to:\n  B with weight 6\nNode B connects to:\n  A with weight 6\n"
        );
    }
}
