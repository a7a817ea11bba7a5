//! Times both shortest path strategies from every node of a graph.
//! I use it with `cargo run --release --example shortest_paths`

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use weighted_graphs::{ShortestPathStrategy, UnGraph, from_file};

fn report(strategy: ShortestPathStrategy, times: &[Duration]) {
    let min = times.iter().min().copied().unwrap_or_default();
    let max = times.iter().max().copied().unwrap_or_default();
    let total: Duration = times.iter().sum();
    let avg = total / times.len().max(1) as u32;
    println!("{strategy:>14}: min {min:?}, max {max:?}, avg {avg:?}");
}

fn main() -> weighted_graphs::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "assets/random.dot".to_string());
    let graph: UnGraph<String> = from_file(&path)?;
    println!("{}: {} nodes, {} edges", path, graph.node_count(), graph.edge_count());

    for strategy in [ShortestPathStrategy::LinearScan, ShortestPathStrategy::PriorityQueue] {
        let mut times = Vec::with_capacity(graph.node_count());
        for source in graph.nodes() {
            let start = Instant::now();
            let distances = graph.shortest_paths(source, strategy)?;
            times.push(start.elapsed());
            std::hint::black_box(distances);
        }
        report(strategy, &times);
    }
    Ok(())
}
