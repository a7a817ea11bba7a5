//! Times depth-first search on the list store against the map store, from every node.
//! I use it with `cargo run --release --example dfs_timing`

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use weighted_graphs::{GraphMap, Recursion, UnGraph, from_file};

fn report(label: &str, times: &[Duration]) {
    let min = times.iter().min().copied().unwrap_or_default();
    let max = times.iter().max().copied().unwrap_or_default();
    let avg = times.iter().sum::<Duration>() / times.len().max(1) as u32;
    println!("{label:>15}: min {min:?}, max {max:?}, avg {avg:?}");
}

fn main() -> weighted_graphs::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "assets/random.dot".to_string());
    let list: UnGraph<String> = from_file(&path)?;
    let map = GraphMap::from(&list);
    println!("{}: {} nodes, {} edges ({} distinct pairs)", path, list.node_count(), list.edge_count(), map.edge_count());

    for mode in [Recursion::Recursive, Recursion::Iterative] {
        let mut list_times = Vec::with_capacity(list.node_count());
        let mut map_times = Vec::with_capacity(list.node_count());
        for start in list.nodes() {
            let now = Instant::now();
            std::hint::black_box(list.dfs_with(start, mode)?);
            list_times.push(now.elapsed());

            let now = Instant::now();
            std::hint::black_box(map.dfs_with(start, mode)?);
            map_times.push(now.elapsed());
        }
        report(&format!("list {mode}"), &list_times);
        report(&format!("map {mode}"), &map_times);
    }
    Ok(())
}
