use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matrix_graph::algorithms::{astar, dijkstra};
use matrix_graph::{InsertMode, MatrixGraph};

/// `side x side` grid with right and down edges; vertex payloads are coordinates.
fn grid(side: usize) -> MatrixGraph<(usize, usize), u32> {
    let mut graph = MatrixGraph::with_capacity(side * side);
    for y in 0..side {
        for x in 0..side {
            graph.insert_vertex((x, y));
        }
    }
    for y in 0..side {
        for x in 0..side {
            let id = y * side + x;
            if x + 1 < side {
                graph.insert_edge(id, id + 1, 1 + (x % 3) as u32, InsertMode::Upsert);
            }
            if y + 1 < side {
                graph.insert_edge(id, id + side, 1 + (y % 2) as u32, InsertMode::Upsert);
            }
        }
    }
    graph
}

fn manhattan(graph: &MatrixGraph<(usize, usize), u32>, from: usize, to: usize) -> u32 {
    match (graph.vertex_data(from), graph.vertex_data(to)) {
        (Ok(&(ax, ay)), Ok(&(bx, by))) => (ax.abs_diff(bx) + ay.abs_diff(by)) as u32,
        _ => 0,
    }
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("Shortest Path");

    for side in [8, 16, 24] {
        let graph = grid(side);
        let target = side * side - 1;

        group.bench_with_input(BenchmarkId::new("dijkstra", side), &graph, |b, graph| {
            b.iter(|| black_box(dijkstra(graph, 0, target)));
        });
        group.bench_with_input(BenchmarkId::new("astar_manhattan", side), &graph, |b, graph| {
            b.iter(|| black_box(astar(graph, 0, target, manhattan, |w: &u32| *w)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shortest_paths);
criterion_main!(benches);
