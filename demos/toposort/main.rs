//! Orders the tasks of a dependency graph.
//! I use it with `cargo run --example toposort -- assets/tasks.dot`

use tracing_subscriber::EnvFilter;
use weighted_graphs::{DiGraph, from_file};

fn main() -> weighted_graphs::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "assets/tasks.dot".to_string());
    let graph: DiGraph<String> = from_file(&path)?;

    match graph.topological_sort() {
        Some(order) => {
            for (i, task) in order.iter().enumerate() {
                println!("{}. {}", i + 1, task);
            }
        }
        None => println!("Graph has a cycle, no ordering exists"),
    }
    Ok(())
}
