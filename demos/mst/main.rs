//! Prints the minimum spanning tree of the lab graph.
//! I use it with `cargo run --example mst`

use tracing_subscriber::EnvFilter;
use weighted_graphs::{UnGraph, from_file};

fn main() -> weighted_graphs::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "assets/lab.dot".to_string());
    let graph: UnGraph<String> = from_file(&path)?;

    let forest = graph.minimum_spanning_tree();
    for (u, v, weight) in &forest.edges {
        println!("{u} -- {v} [{weight}]");
    }
    println!("Total weight: {}", forest.total_weight());
    if !forest.is_spanning_tree() {
        println!("Graph is disconnected, {} components", forest.components);
    }
    Ok(())
}
