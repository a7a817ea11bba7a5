use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::types::{DEFAULT_WEIGHT, EdgeType, Weight};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Reads a graph from a file.
///
/// Input is a strict DOT subset, one edge per line:
/// - the document must contain `strict graph` (or `strict digraph` for a directed graph),
/// - every line containing `--` (`->` for directed) is an edge `u -- v [attributes];`,
/// - attributes are `key=value` pairs separated by commas, `weight=<integer>` sets the
///   weight, a missing weight means 1,
/// - other lines are ignored, so isolated nodes are lost.
///
/// <div class="warning">
///
/// > The `[...]` block is mandatory, even if empty.
/// > Node names are trimmed and surrounding double quotes are removed.
///
/// </div>
///
/// Example input:
/// ```text
/// strict graph {
/// A -- B [weight=5];
/// A -- C [weight=10];
/// B -- C [];
/// }
/// ```
pub fn from_file<Ty: EdgeType>(path: impl AsRef<Path>) -> Result<Graph<String, Ty>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GraphError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => GraphError::Io(e),
    })?;
    from_reader(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str<Ty: EdgeType>(input: &str) -> Result<Graph<String, Ty>> {
    parse_graph_from_dot(input.as_bytes())
}

pub fn from_reader<Ty: EdgeType, R: Read>(mut reader: R) -> Result<Graph<String, Ty>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_graph_from_dot(content.as_bytes())
}

fn parse_graph_from_dot<Ty: EdgeType, R: BufRead>(reader: R) -> Result<Graph<String, Ty>> {
    let (marker, operator) = if Ty::is_directed() {
        ("strict digraph", "->")
    } else {
        ("strict graph", "--")
    };

    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;
    if !lines.iter().any(|line| line.contains(marker)) {
        tracing::warn!(marker, "import rejected: marker missing");
        return Err(GraphError::format(None, format!("missing `{marker}` marker")));
    }

    let mut graph = Graph::new();
    for (i, line) in lines.iter().enumerate() {
        if !line.contains(operator) {
            continue;
        }
        let (u, v, weight) = parse_edge_line(line, operator).map_err(|reason| {
            tracing::warn!(line = i + 1, %reason, "import rejected");
            GraphError::format(Some(i + 1), reason)
        })?;
        graph.add_node(u.clone());
        graph.add_node(v.clone());
        graph.add_edge(&u, &v, weight);
    }

    tracing::debug!(nodes = graph.node_count(), edges = graph.edge_count(), "graph imported");
    Ok(graph)
}

/// Splits `u -- v [attributes];` into its endpoints and weight.
fn parse_edge_line(line: &str, operator: &str) -> std::result::Result<(String, String, Weight), String> {
    let mut parts = line.split('[');
    let (Some(nodes), Some(attributes), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("expected exactly one `[` opening the attribute list".to_string());
    };

    let mut ends = nodes.trim().split(operator);
    let (Some(u), Some(v), None) = (ends.next(), ends.next(), ends.next()) else {
        return Err(format!("expected exactly two endpoints around `{operator}`"));
    };
    let (u, v) = (node_name(u), node_name(v));
    if u.is_empty() || v.is_empty() {
        return Err("empty endpoint name".to_string());
    }

    let attributes = attributes.trim().trim_end_matches(';').trim_end().trim_end_matches(']');
    let mut weight = DEFAULT_WEIGHT;
    for pair in attributes.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key.trim() == "weight" {
            let value = value.trim().trim_matches('"');
            weight = value
                .parse()
                .map_err(|_| format!("weight `{value}` is not a non-negative integer"))?;
        }
    }

    Ok((u, v, weight))
}

fn node_name(raw: &str) -> String {
    raw.trim().trim_matches('"').to_string()
}

impl<Ty: EdgeType> Graph<String, Ty> {
    /// Replaces the graph's content with the parsed text.
    ///
    /// On error the graph is left exactly as it was.
    pub fn import_from_str(&mut self, input: &str) -> Result<()> {
        *self = from_str(input)?;
        Ok(())
    }

    /// File variant of [`Graph::import_from_str`].
    pub fn import_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        *self = from_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiGraph, UnGraph};
    use std::io::Write;

    const ABC: &str = "strict graph {\nA;\nB;\nC;\nA -- B [weight=5];\nA -- C [weight=10];\n}\n";

    fn names(g: &UnGraph<String>) -> Vec<&str> {
        g.nodes().map(String::as_str).collect()
    }

    #[test]
    fn test_from_str() {
        let g: UnGraph<String> = from_str(ABC).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(names(&g), vec!["A", "B", "C"]);
        let d = g.shortest_paths_heap("B").unwrap();
        assert_eq!(d.get("C"), Some(15));
    }

    #[test]
    fn test_default_weight_and_extra_attributes() {
        let input = "strict graph \"\" {\n\"x\" -- \"y\" [];\ny -- z [color=red, weight=7];\nz -- x [label=\"a\"];\n}";
        let g: UnGraph<String> = from_str(input).unwrap();
        let edges: Vec<_> = g.edges().into_iter().map(|(u, v, w)| (u.as_str(), v.as_str(), w)).collect();
        assert_eq!(edges, vec![("x", "y", 1), ("x", "z", 1), ("y", "z", 7)]);
    }

    #[test]
    fn test_missing_marker() {
        let err = from_str::<petgraph::Undirected>("graph {\nA -- B [weight=1];\n}").unwrap_err();
        assert!(matches!(err, GraphError::ImportFormat { line: None, .. }));
    }

    #[test]
    fn test_missing_bracket() {
        let err = from_str::<petgraph::Undirected>("strict graph {\nA -- B [weight=1];\nB -- C;\n}").unwrap_err();
        assert!(matches!(err, GraphError::ImportFormat { line: Some(3), .. }));
    }

    #[test]
    fn test_too_many_endpoints() {
        let err = from_str::<petgraph::Undirected>("strict graph {\nA -- B -- C [];\n}").unwrap_err();
        assert!(matches!(err, GraphError::ImportFormat { line: Some(2), .. }));
    }

    #[test]
    fn test_bad_weight() {
        for weight in ["abc", "-3", "1.5"] {
            let input = format!("strict graph {{\nA -- B [weight={weight}];\n}}");
            let err = from_str::<petgraph::Undirected>(&input).unwrap_err();
            assert!(matches!(err, GraphError::ImportFormat { line: Some(2), .. }), "{weight}");
        }
    }

    #[test]
    fn test_failed_import_keeps_graph() {
        let mut g: UnGraph<String> = from_str(ABC).unwrap();
        assert!(g.import_from_str("strict graph {\nA -- D\n}").is_err());
        assert!(g.import_from_str("nothing here").is_err());
        assert_eq!(names(&g), vec!["A", "B", "C"]);
        assert_eq!(g.edge_count(), 2);

        g.import_from_str("strict graph {\nQ -- R [weight=2];\n}").unwrap();
        assert_eq!(names(&g), vec!["Q", "R"]);
    }

    #[test]
    fn test_directed_import() {
        let g: DiGraph<String> = from_str("strict digraph {\na -> b [];\nb -> c [];\n}").unwrap();
        assert_eq!(g.edge_count(), 2);
        assert!(g.is_dag());
        assert!(from_str::<petgraph::Directed>(ABC).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ABC.as_bytes()).unwrap();
        let g: UnGraph<String> = from_file(file.path()).unwrap();
        assert_eq!(g.edge_count(), 2);

        let mut h: UnGraph<String> = UnGraph::new();
        h.import_from_file(file.path()).unwrap();
        assert_eq!(names(&h), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = from_file::<petgraph::Undirected>(dir.path().join("missing.dot")).unwrap_err();
        assert!(matches!(err, GraphError::FileNotFound { .. }));
    }
}
