use crate::error::Result;
use crate::graph::Graph;
use crate::types::{EdgeType, NodeKey};
use std::fmt::Display;
use std::path::Path;

/// Returns the graph in the strict DOT subset read by [`crate::input::from_str`].
///
/// Nodes are listed first so isolated ones are visible, then one line per logical
/// edge with its weight. Feeding the result back through the importer yields the
/// same edges, isolated nodes excepted.
pub fn to_dot_str<K: NodeKey + Display, Ty: EdgeType>(graph: &Graph<K, Ty>) -> String {
    let (header, operator) = if Ty::is_directed() {
        ("strict digraph {\n", "->")
    } else {
        ("strict graph {\n", "--")
    };

    let mut output = String::from(header);
    for node in graph.nodes() {
        output.push_str(&format!("  {};\n", node));
    }
    for (u, v, weight) in graph.edges() {
        output.push_str(&format!("  {} {} {} [weight={}];\n", u, operator, v, weight));
    }
    output.push_str("}\n");
    output
}

/// Writes the graph to a file in the format of [`to_dot_str`].
pub fn to_dot_file<K: NodeKey + Display, Ty: EdgeType>(graph: &Graph<K, Ty>, path: impl AsRef<Path>) -> Result<()> {
    to_file(&to_dot_str(graph), path)
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}

/// Console listing of the adjacency structure, one block per node in insertion order.
impl<K: NodeKey + Display, Ty: EdgeType> Display for Graph<K, Ty> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for node in self.nodes() {
            writeln!(f, "Node {} connects to:", node)?;
            for (neighbor, weight) in self.neighbors(node).map_err(|_| std::fmt::Error)? {
                writeln!(f, "  {} with weight {}", neighbor, weight)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::from_str;
    use crate::testing::random_graphs::random_graph;
    use crate::types::{DiGraph, UnGraph};

    fn sorted_edges<Ty: EdgeType>(g: &Graph<String, Ty>) -> Vec<(String, String, u32)> {
        let mut edges: Vec<_> = g
            .edges()
            .into_iter()
            .map(|(u, v, w)| {
                let (u, v) = if Ty::is_directed() || u <= v { (u, v) } else { (v, u) };
                (u.clone(), v.clone(), w)
            })
            .collect();
        edges.sort();
        edges
    }

    #[test]
    fn test_to_dot_str() {
        let mut g = UnGraph::new();
        for k in ["A", "B", "C"] {
            g.add_node(k);
        }
        g.add_edge("A", "B", 5);
        g.add_edge("C", "A", 10);
        assert_eq!(
            to_dot_str(&g),
            "strict graph {\n  A;\n  B;\n  C;\n  A -- B [weight=5];\n  A -- C [weight=10];\n}\n"
        );
    }

    #[test]
    fn test_display() {
        let mut g = UnGraph::new();
        g.add_node("A");
        g.add_node("B");
        g.add_edge("A", "B", 5);
        assert_eq!(
            g.to_string(),
            "Node A connects to:\n  B with weight 5\nNode B connects to:\n  A with weight 5\n"
        );
    }

    #[test]
    fn test_round_trip_random() {
        for seed in 0..10 {
            let original = random_graph(30, 70, 20, seed);
            let mut relabeled: UnGraph<String> = UnGraph::new();
            for node in original.nodes() {
                relabeled.add_node(format!("n{node}"));
            }
            for (u, v, w) in original.edges() {
                relabeled.add_edge(&format!("n{u}"), &format!("n{v}"), w);
            }

            let parsed: UnGraph<String> = from_str(&to_dot_str(&relabeled)).unwrap();
            assert_eq!(sorted_edges(&parsed), sorted_edges(&relabeled));
        }
    }

    #[test]
    fn test_round_trip_directed() {
        let mut g: DiGraph<String> = DiGraph::new();
        for k in ["a", "b", "c"] {
            g.add_node(k.to_string());
        }
        g.add_edge("a", "b", 2);
        g.add_edge("c", "b", 3);
        g.add_edge("c", "b", 3);
        let text = to_dot_str(&g);
        assert!(text.starts_with("strict digraph {"));
        let parsed: DiGraph<String> = from_str(&text).unwrap();
        assert_eq!(sorted_edges(&parsed), sorted_edges(&g));
    }

    #[test]
    fn test_to_dot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dot");
        let mut g = UnGraph::new();
        g.add_node(1);
        g.add_node(2);
        g.add_edge(&1, &2, 4);
        to_dot_file(&g, &path).unwrap();
        let parsed: UnGraph<String> = crate::input::from_file(&path).unwrap();
        assert_eq!(parsed.edges(), vec![(&"1".to_string(), &"2".to_string(), 4)]);
    }
}
