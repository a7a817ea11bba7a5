//! Draws a graph with its minimum spanning tree in bold.
//! I use it with `cargo run --example draw | neato -Tsvg > mst.svg`

use weighted_graphs::input::from_str;
use weighted_graphs::visualize::draw_graph;
use weighted_graphs::UnGraph;

fn main() -> weighted_graphs::Result<()> {
    let input = "strict graph {
        A -- B [weight=3];
        A -- D [weight=1];
        A -- E [weight=9];
        C -- B [weight=12];
        C -- D [weight=3];
        D -- B [weight=10];
        D -- F [weight=2];
        F -- E [weight=15];
    }";

    let graph: UnGraph<String> = from_str(input)?;
    let mst = graph.minimum_spanning_tree();

    print!("{}", draw_graph(&graph, Some(&mst)));
    Ok(())
}
