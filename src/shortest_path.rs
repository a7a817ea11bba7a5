use crate::error::Result;
use crate::graph::Graph;
use crate::types::{EdgeType, INFINITY, NodeKey, ShortestPathStrategy};
use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use std::borrow::Borrow;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Single-source path costs, one per node of the graph they were computed on.
///
/// Unreachable nodes hold [`INFINITY`]. Two results compare equal when they
/// list the same nodes with the same costs.
#[derive(Clone, Debug)]
pub struct Distances<'a, K> {
    keys: &'a [K],
    index: &'a HashMap<K, usize>,
    dist: Vec<u64>,
}

impl<'a, K: NodeKey> Distances<'a, K> {
    /// Cost to `key`, [`INFINITY`] if unreachable, `None` if it is not a node.
    pub fn get<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&u| self.dist[u])
    }

    pub fn is_reachable<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some_and(|d| d != INFINITY)
    }

    /// `(node, cost)` in node insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a K, u64)> + '_ {
        self.keys.iter().zip(self.dist.iter().copied())
    }

    pub fn to_map(&self) -> std::collections::HashMap<K, u64> {
        self.iter().map(|(k, d)| (k.clone(), d)).collect()
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }
}

impl<K: PartialEq> PartialEq for Distances<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.dist == other.dist
    }
}

impl<K: Eq> Eq for Distances<'_, K> {}

impl<K: NodeKey, Ty: EdgeType> Graph<K, Ty> {
    /// Shortest path costs from `source` using the selected strategy.
    pub fn shortest_paths<Q>(&self, source: &Q, strategy: ShortestPathStrategy) -> Result<Distances<'_, K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        match strategy {
            ShortestPathStrategy::LinearScan => self.shortest_paths_linear(source),
            ShortestPathStrategy::PriorityQueue => self.shortest_paths_heap(source),
        }
    }

    /// Dijkstra that finds the next node by scanning the whole frontier, O(V^2).
    ///
    /// Ties go to the node inserted first. The loop ends early once everything left
    /// in the frontier is unreachable.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn shortest_paths_linear<Q>(&self, source: &Q) -> Result<Distances<'_, K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        let s = self.index_of(source)?;
        let n = self.node_count();
        let adjacency = self.adjacency();

        let mut dist = vec![INFINITY; n];
        dist[s] = 0;
        let mut frontier = FixedBitSet::with_capacity(n);
        frontier.insert_range(..);

        loop {
            let mut best = None;
            let mut best_dist = INFINITY;
            for u in frontier.ones() {
                if dist[u] < best_dist {
                    best_dist = dist[u];
                    best = Some(u);
                }
            }
            let Some(u) = best else {
                break;
            };
            frontier.set(u, false);

            for &(v, weight) in &adjacency[u] {
                let alt = dist[u].saturating_add(u64::from(weight));
                if alt < dist[v] {
                    dist[v] = alt;
                }
            }
        }

        Ok(self.distances(dist))
    }

    /// Dijkstra over a binary min-heap, O((E+V) log V).
    ///
    /// Improved neighbors are pushed again rather than decreased in place, so the
    /// heap can hold several entries per node. An entry whose cost is above the
    /// node's recorded cost is stale and is skipped when popped.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn shortest_paths_heap<Q>(&self, source: &Q) -> Result<Distances<'_, K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        let s = self.index_of(source)?;
        let adjacency = self.adjacency();

        let mut dist = vec![INFINITY; self.node_count()];
        dist[s] = 0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0u64, s)));
        let mut stale = 0usize;

        while let Some(Reverse((d, u))) = heap.pop() {
            if d > dist[u] {
                stale += 1;
                continue;
            }
            for &(v, weight) in &adjacency[u] {
                let alt = d.saturating_add(u64::from(weight));
                if alt < dist[v] {
                    dist[v] = alt;
                    heap.push(Reverse((alt, v)));
                }
            }
        }

        tracing::trace!(stale, "heap drained");
        Ok(self.distances(dist))
    }

    fn distances(&self, dist: Vec<u64>) -> Distances<'_, K> {
        Distances {
            keys: self.keys(),
            index: self.lookup(),
            dist,
        }
    }
}
