use crate::types::UnGraph;

/// Unit-weight grid graph with `rows * cols` nodes, node `r * cols + c` at row `r`, column `c`.
///
/// Shortest path costs from node 0 are Manhattan distances.
pub fn generate_grid_graph(rows: usize, cols: usize) -> UnGraph<usize> {
    let mut graph = UnGraph::with_capacity(rows * cols);

    for r in 0..rows {
        for c in 0..cols {
            graph.add_node(r * cols + c);
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            let here = r * cols + c;
            if r + 1 < rows {
                graph.add_unit_edge(&here, &((r + 1) * cols + c));
            }
            if c + 1 < cols {
                graph.add_unit_edge(&here, &(here + 1));
            }
        }
    }

    graph
}

/// Path `0 - 1 - ... - (n-1)`, the worst case for recursive DFS depth.
pub fn generate_path_graph(n: usize) -> UnGraph<usize> {
    let mut graph = UnGraph::with_capacity(n);
    for i in 0..n {
        graph.add_node(i);
        if i > 0 {
            graph.add_unit_edge(&(i - 1), &i);
        }
    }
    graph
}
