use dot::{Edges, GraphWalk, Kind, Labeller, Nodes, Style};
use std::fmt::Display;

use crate::graph::Graph;
use crate::mst::SpanningForest;
use crate::types::{EdgeType, NodeKey, Weight};

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    weight: Weight,
    highlighted: bool,
}

struct Drawing<'a, K> {
    directed: bool,
    labels: &'a [K],
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl<'a, K: Display> Labeller<'a, Node, Edge> for Drawing<'a, K> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::label(self.labels[*n].to_string())
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.weight.to_string())
    }

    fn edge_style(&self, e: &Edge) -> Style {
        if e.highlighted { Style::Bold } else { Style::None }
    }

    fn kind(&self) -> Kind {
        if self.directed { Kind::Digraph } else { Kind::Graph }
    }
}

impl<'a, K> GraphWalk<'a, Node, Edge> for Drawing<'a, K> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.as_slice().into()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Returns the graph in DOT format, edges labelled with their weights.
///
/// Edges of `highlight` are drawn bold; when a pair has parallel edges, as many
/// of them are bolded as the forest uses. Node labels are the keys' `Display` form.
///
/// Use returned string with `dot` or `neato`.
pub fn draw_graph<K: NodeKey + Display, Ty: EdgeType>(graph: &Graph<K, Ty>, highlight: Option<&SpanningForest<'_, K>>) -> String {
    let mut pending: Vec<(usize, usize, Weight)> = highlight
        .map(|forest| {
            forest
                .edges
                .iter()
                .filter_map(|&(u, v, w)| Some((graph.index_of(u).ok()?, graph.index_of(v).ok()?, w)))
                .collect()
        })
        .unwrap_or_default();

    let mut drawing = Drawing {
        directed: Ty::is_directed(),
        labels: graph.keys(),
        nodes: (0..graph.node_count()).collect(),
        edges: Vec::with_capacity(graph.edge_count()),
    };

    for (u, v, weight) in graph.edge_indices() {
        let matched = pending
            .iter()
            .position(|&(a, b, w)| w == weight && ((a, b) == (u, v) || (!Ty::is_directed() && (b, a) == (u, v))));
        if let Some(i) = matched {
            pending.swap_remove(i);
        }
        drawing.edges.push(Edge {
            source: u,
            target: v,
            weight,
            highlighted: matched.is_some(),
        });
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&drawing, &mut buffer).expect("writing into a Vec does not fail");
    String::from_utf8(buffer.into_inner()).expect("dot output is UTF-8")
}
