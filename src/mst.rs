use crate::types::{NodeKey, UnGraph, Weight};
use crate::union_find::UnionFind;

/// Edges accepted by Kruskal, in acceptance order (non-decreasing weight).
///
/// On a connected graph this is a spanning tree with `node_count - 1` edges. On a
/// disconnected graph it is a minimum spanning forest: one tree per component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest<'a, K> {
    pub edges: Vec<(&'a K, &'a K, Weight)>,
    /// Number of trees, i.e. connected components of the graph.
    pub components: usize,
}

impl<K> SpanningForest<'_, K> {
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|&(_, _, w)| u64::from(w)).sum()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the forest is a single tree, i.e. the graph was connected.
    pub fn is_spanning_tree(&self) -> bool {
        self.components <= 1
    }
}

impl<K: NodeKey> UnGraph<K> {
    /// Kruskal's minimum spanning tree.
    ///
    /// Every adjacency entry is a candidate, so each undirected edge is seen from
    /// both ends; the second sighting is rejected by the union-find. Candidates are
    /// sorted stably by weight, ties keep node order then adjacency order.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn minimum_spanning_tree(&self) -> SpanningForest<'_, K> {
        let n = self.node_count();
        let mut candidates: Vec<(usize, usize, Weight)> = self
            .adjacency()
            .iter()
            .enumerate()
            .flat_map(|(u, list)| list.iter().map(move |&(v, w)| (u, v, w)))
            .collect();
        radsort::sort_by_key(&mut candidates, |&(_, _, w)| w);

        let mut sets = UnionFind::new(n);
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        for (u, v, w) in candidates {
            if sets.union(u, v) {
                edges.push((self.key(u), self.key(v), w));
                if edges.len() + 1 == n {
                    break;
                }
            }
        }

        tracing::debug!(accepted = edges.len(), components = sets.set_count(), "kruskal done");
        SpanningForest {
            edges,
            components: sets.set_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::graph_enumerator::SpanningTreeEnumerator;
    use crate::testing::random_graphs::random_graph;

    fn lab_graph() -> UnGraph<&'static str> {
        let mut g = UnGraph::new();
        for k in ["A", "B", "C", "D", "E", "F"] {
            g.add_node(k);
        }
        g.add_edge("A", "B", 3);
        g.add_edge("A", "D", 1);
        g.add_edge("A", "E", 9);
        g.add_edge("C", "B", 12);
        g.add_edge("C", "D", 3);
        g.add_edge("D", "B", 10);
        g.add_edge("D", "F", 2);
        g.add_edge("F", "E", 15);
        g
    }

    #[test]
    fn test_lab_example() {
        let g = lab_graph();
        let mst = g.minimum_spanning_tree();
        assert_eq!(mst.len(), 5);
        assert_eq!(mst.total_weight(), 18);
        assert!(mst.is_spanning_tree());
        assert_eq!(
            mst.edges,
            vec![
                (&"A", &"D", 1),
                (&"D", &"F", 2),
                (&"A", &"B", 3),
                (&"C", &"D", 3),
                (&"A", &"E", 9),
            ]
        );
    }

    #[test]
    fn test_disconnected_gives_forest() {
        let mut g = lab_graph();
        g.add_node("X");
        g.add_node("Y");
        g.add_edge("X", "Y", 4);
        g.add_node("Z");
        let forest = g.minimum_spanning_tree();
        assert_eq!(forest.components, 3);
        assert_eq!(forest.len(), g.node_count() - 3);
        assert_eq!(forest.total_weight(), 22);
        assert!(!forest.is_spanning_tree());
    }

    #[test]
    fn test_empty_and_single() {
        let mut g: UnGraph<u8> = UnGraph::new();
        assert!(g.minimum_spanning_tree().is_empty());
        g.add_node(1);
        let mst = g.minimum_spanning_tree();
        assert!(mst.is_empty());
        assert!(mst.is_spanning_tree());
    }

    #[test]
    fn test_multi_edge_picks_lighter() {
        let mut g = UnGraph::new();
        g.add_node('a');
        g.add_node('b');
        g.add_edge(&'a', &'b', 9);
        g.add_edge(&'a', &'b', 4);
        g.add_edge(&'a', &'a', 0);
        let mst = g.minimum_spanning_tree();
        assert_eq!(mst.edges, vec![(&'a', &'b', 4)]);
    }

    #[test]
    fn test_equal_weights_keep_discovery_order() {
        let mut g = UnGraph::new();
        for i in 0..4 {
            g.add_node(i);
        }
        g.add_unit_edge(&0, &1);
        g.add_unit_edge(&1, &2);
        g.add_unit_edge(&2, &0);
        g.add_unit_edge(&2, &3);
        let mst = g.minimum_spanning_tree();
        assert_eq!(mst.edges, vec![(&0, &1, 1), (&0, &2, 1), (&2, &3, 1)]);
    }

    #[test]
    fn test_matches_brute_force() {
        for seed in 0..30 {
            let g = random_graph(5, 7, 9, seed);
            let best = SpanningTreeEnumerator::new(&g)
                .map(|tree| tree.iter().map(|&(_, _, w)| u64::from(w)).sum::<u64>())
                .min()
                .expect("random graphs are connected");
            let mst = g.minimum_spanning_tree();
            assert_eq!(mst.len(), 4);
            assert_eq!(mst.total_weight(), best, "seed {seed}");
        }
    }

    #[test]
    fn test_matches_petgraph() {
        for seed in 0..10 {
            let g = random_graph(60, 200, 50, seed);
            let pg = g.to_petgraph();
            let theirs: u64 = petgraph::algo::min_spanning_tree(&pg)
                .filter_map(|element| match element {
                    petgraph::data::Element::Edge { weight, .. } => Some(u64::from(weight)),
                    _ => None,
                })
                .sum();
            assert_eq!(g.minimum_spanning_tree().total_weight(), theirs);
        }
    }
}
