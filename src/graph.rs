use crate::error::{GraphError, Result};
use crate::types::{DEFAULT_WEIGHT, EdgeType, NodeKey, Undirected, Weight};
use hashbrown::HashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use std::marker::PhantomData;

/// Weighted graph keyed by arbitrary node keys.
///
/// Nodes keep their insertion order, and every adjacency list keeps the order in
/// which edges were added. Algorithms rely on both for reproducible output.
///
/// Internally a node is its position in `keys`; adjacency entries store positions,
/// so `index` is only consulted when translating a caller's key.
///
/// `Ty` is petgraph's edge type marker: [`Undirected`] stores each edge at both
/// endpoints, [`crate::Directed`] only at its source.
#[derive(Clone, Debug)]
pub struct Graph<K, Ty = Undirected> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
    edge_type: PhantomData<Ty>,
}

impl<K: NodeKey, Ty: EdgeType> Default for Graph<K, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKey, Ty: EdgeType> Graph<K, Ty> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            keys: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_type: PhantomData,
        }
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    /// Number of logical edges. An undirected edge counts once, even though it
    /// occupies an entry in both endpoints' lists.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(Vec::len).sum();
        if Ty::is_directed() { entries } else { entries / 2 }
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

    /// Adds a node with an empty adjacency list.
    ///
    /// Returns `false` and leaves the graph untouched if the key already exists.
    pub fn add_node(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            tracing::trace!(key = ?key, "add_node: already exists");
            return false;
        }
        self.index.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        self.adjacency.push(Vec::new());
        true
    }

    /// Like [`Graph::add_node`], but a duplicate key is an [`GraphError::AlreadyExists`] error.
    pub fn try_add_node(&mut self, key: K) -> Result<()> {
        if self.index.contains_key(&key) {
            return Err(GraphError::AlreadyExists {
                key: format!("{key:?}"),
            });
        }
        self.add_node(key);
        Ok(())
    }

    /// Removes a node together with every adjacency entry that points at it.
    ///
    /// Positions after the removed node shift down by one, so all remaining
    /// entries are renumbered in the same pass. Returns `false` if the key is absent.
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
        for list in self.adjacency.iter_mut() {
            list.retain(|&(v, _)| v != removed);
            for (v, _) in list.iter_mut() {
                if *v > removed {
                    *v -= 1;
                }
            }
        }
        for position in self.index.values_mut() {
            if *position > removed {
                *position -= 1;
            }
        }
        true
    }

    /// Appends an edge. Existing edges between the same pair are kept, so calling
    /// this twice creates a multi-edge.
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
        self.add_edge_by_index(u, v, weight);
        true
    }

    /// [`Graph::add_edge`] with [`DEFAULT_WEIGHT`].
    pub fn add_unit_edge<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    pub(crate) fn add_edge_by_index(&mut self, u: usize, v: usize, weight: Weight) {
        self.adjacency[u].push((v, weight));
        if !Ty::is_directed() {
            self.adjacency[v].push((u, weight));
        }
    }

    /// Removes every edge between `from` and `to`, whatever its weight.
    ///
    /// For directed graphs only edges `from -> to` are removed. Returns the number
    /// of adjacency entries dropped, 0 if either endpoint is absent.
    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(&u), Some(&v)) = (self.index.get(from), self.index.get(to)) else {
            tracing::trace!("remove_edge: missing endpoint");
            return 0;
        };

        let before = self.adjacency[u].len() + self.adjacency[v].len();
        self.adjacency[u].retain(|&(w, _)| w != v);
        if !Ty::is_directed() {
            self.adjacency[v].retain(|&(w, _)| w != u);
        }
        let after = self.adjacency[u].len() + self.adjacency[v].len();
        // a self-loop shares one list, which was counted twice on both sides
        if u == v { (before - after) / 2 } else { before - after }
    }

    /// Adjacency list of `key` as `(neighbor, weight)` pairs in insertion order.
    pub fn neighbors<Q>(&self, key: &Q) -> Result<Neighbors<'_, K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        let u = self.index_of(key)?;
        Ok(Neighbors::new(&self.keys, &self.adjacency[u]))
    }

    /// Number of adjacency entries of `key`. A self-loop in an undirected graph counts twice.
    pub fn degree<Q>(&self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        Ok(self.adjacency[self.index_of(key)?].len())
    }

    /// Logical edges as `(source, target, weight)`.
    ///
    /// Directed graphs yield every entry. Undirected graphs yield each stored pair
    /// once, from the endpoint that was inserted first.
    pub fn edges(&self) -> Vec<(&K, &K, Weight)> {
        self.edge_indices()
            .into_iter()
            .map(|(u, v, weight)| (&self.keys[u], &self.keys[v], weight))
            .collect()
    }

    pub(crate) fn edge_indices(&self) -> Vec<(usize, usize, Weight)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (u, list) in self.adjacency.iter().enumerate() {
            let mut self_loops = 0;
            for &(v, weight) in list {
                let keep = if Ty::is_directed() || u < v {
                    true
                } else if u == v {
                    // both halves of an undirected self-loop sit in this list
                    self_loops += 1;
                    self_loops % 2 == 1
                } else {
                    false
                };
                if keep {
                    edges.push((u, v, weight));
                }
            }
        }
        edges
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.index.clear();
        self.adjacency.clear();
    }

    /// Copies the graph into a petgraph graph with the same node and edge order.
    pub fn to_petgraph(&self) -> petgraph::Graph<K, Weight, Ty> {
        let mut graph = petgraph::Graph::with_capacity(self.node_count(), self.edge_count());
        let nodes: Vec<_> = self.keys.iter().map(|k| graph.add_node(k.clone())).collect();
        for (u, v, weight) in self.edge_indices() {
            graph.add_edge(nodes[u], nodes[v], weight);
        }
        graph
    }

    pub(crate) fn index_of<Q>(&self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::not_found(key))
    }

    pub(crate) fn key(&self, u: usize) -> &K {
        &self.keys[u]
    }

    pub(crate) fn keys(&self) -> &[K] {
        &self.keys
    }

    pub(crate) fn lookup(&self) -> &HashMap<K, usize> {
        &self.index
    }

    pub(crate) fn adjacency(&self) -> &[Vec<(usize, Weight)>] {
        &self.adjacency
    }
}

/// Iterator over a node's adjacency list, see [`Graph::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<'a, K> {
    keys: &'a [K],
    entries: std::slice::Iter<'a, (usize, Weight)>,
}

impl<'a, K> Neighbors<'a, K> {
    pub(crate) fn new(keys: &'a [K], entries: &'a [(usize, Weight)]) -> Self {
        Self {
            keys,
            entries: entries.iter(),
        }
    }
}

impl<'a, K> Iterator for Neighbors<'a, K> {
    type Item = (&'a K, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|&(v, w)| (&self.keys[v], w))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K> ExactSizeIterator for Neighbors<'_, K> {}
