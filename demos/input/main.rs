//! Imports a graph and prints its adjacency listing.
//! I use it with `cargo run --example input -- assets/lab.dot`

use tracing_subscriber::EnvFilter;
use weighted_graphs::{UnGraph, from_file};

fn main() -> weighted_graphs::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "assets/random.dot".to_string());
    let graph: UnGraph<String> = from_file(&path)?;

    println!("Number of nodes: {}", graph.node_count());
    println!("Number of edges: {}", graph.edge_count());
    print!("{}", graph);
    Ok(())
}
