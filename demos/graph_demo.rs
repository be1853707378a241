//! Road-network walkthrough: build a graph, print it, walk it, route through it.
//!
//! Run with `RUST_LOG=matrix_graph=debug` to see the container and search logs.

use anyhow::Context;
use matrix_graph::algorithms::{astar, bfs, dfs, dijkstra};
use matrix_graph::{InsertMode, MatrixGraph};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy)]
struct City {
    name: &'static str,
    x: f64,
    y: f64,
}

fn straight_line(graph: &MatrixGraph<City, f64>, from: usize, to: usize) -> f64 {
    match (graph.vertex_data(from), graph.vertex_data(to)) {
        (Ok(a), Ok(b)) => (a.x - b.x).hypot(a.y - b.y),
        _ => 0.0,
    }
}

fn city_name(graph: &MatrixGraph<City, f64>, id: usize) -> &'static str {
    graph.vertex_data(id).map_or("?", |c| c.name)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Adjacency Matrix Graph Example");
    println!("==============================");

    let mut roads: MatrixGraph<City, f64> = MatrixGraph::new();
    for (name, x, y) in [
        ("Gdansk", 18.6, 54.4),
        ("Torun", 18.6, 53.0),
        ("Poznan", 16.9, 52.4),
        ("Warsaw", 21.0, 52.2),
        ("Lodz", 19.5, 51.8),
        ("Krakow", 19.9, 50.1),
    ] {
        roads.insert_vertex(City { name, x, y });
    }

    // Road lengths are never shorter than the straight line between cities.
    for (from, to, stretch) in [
        (0, 1, 1.1),
        (0, 3, 1.4),
        (1, 2, 1.2),
        (1, 3, 1.3),
        (1, 4, 1.1),
        (2, 4, 1.2),
        (3, 5, 1.3),
        (4, 5, 1.1),
        (4, 3, 1.2),
    ] {
        let length = straight_line(&roads, from, to) * stretch;
        roads.insert_edge(from, to, length, InsertMode::Upsert);
    }

    println!("\nAdjacency matrix:");
    print!("{}", roads.matrix_display());

    let mut order = Vec::new();
    dfs(&roads, 0, |city| order.push(city.name))?;
    println!("\nDepth-first from Gdansk:   {}", order.join(" -> "));

    order.clear();
    bfs(&roads, 0, |city| order.push(city.name))?;
    println!("Breadth-first from Gdansk: {}", order.join(" -> "));

    let route = dijkstra(&roads, 0, 5)?.context("Krakow should be reachable from Gdansk")?;
    let stops: Vec<_> = route.vertices.iter().map(|&id| city_name(&roads, id)).collect();
    println!("\nDijkstra: {} ({:.2})", stops.join(" -> "), route.cost);

    let guided = astar(&roads, 0, 5, straight_line, |length: &f64| *length)?
        .context("Krakow should be reachable from Gdansk")?;
    let stops: Vec<_> = guided.vertices.iter().map(|&id| city_name(&roads, id)).collect();
    println!("A*:       {} ({:.2})", stops.join(" -> "), guided.cost);

    // Nothing leaves Krakow.
    let back = dijkstra(&roads, 5, 0)?;
    println!("\nKrakow -> Gdansk: {}", if back.is_some() { "reachable" } else { "no route" });

    let stats = roads.statistics();
    println!("\nStatistics: {}", serde_json::to_string_pretty(&stats)?);

    roads.remove_vertex(1);
    println!("\nAfter closing Torun:");
    for (id, city) in roads.vertices() {
        let out: Vec<_> = roads.out_neighbors(id).map(|n| city_name(&roads, n)).collect();
        println!("  {id}: {:<7} -> {}", city.name, out.join(", "));
    }

    Ok(())
}
