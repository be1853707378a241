use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matrix_graph::{InsertMode, MatrixGraph};

fn binary_tree(size: usize) -> MatrixGraph<usize, ()> {
    let mut graph = MatrixGraph::with_capacity(size);
    for i in 0..size {
        graph.insert_vertex(i);
    }
    for i in 1..size {
        graph.insert_edge(i / 2, i, (), InsertMode::Upsert);
    }
    graph
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph Build");

    for size in [64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("with_capacity", size), &size, |b, &size| {
            b.iter(|| black_box(binary_tree(size)));
        });

        // Growth path: no capacity hint, the matrix doubles as it goes.
        group.bench_with_input(BenchmarkId::new("grow", size), &size, |b, &size| {
            b.iter(|| {
                let mut graph = MatrixGraph::new();
                for i in 0..size {
                    graph.insert_vertex(i);
                    if i > 0 {
                        graph.insert_edge(i - 1, i, (), InsertMode::Upsert);
                    }
                }
                black_box(graph.edge_count())
            });
        });
    }

    group.finish();
}

fn bench_graph_remove(c: &mut Criterion) {
    let size = 512;

    c.bench_function("matrix_graph_remove_middle_vertex", |b| {
        let base = binary_tree(size);
        b.iter(|| {
            let mut graph = base.clone();
            black_box(graph.remove_vertex(size / 2));
        });
    });

    c.bench_function("matrix_graph_drain_edges", |b| {
        let base = binary_tree(size);
        b.iter(|| {
            let mut graph = base.clone();
            let mut cursor = graph.begin_edges();
            while !cursor.at_end(&graph) {
                cursor = graph.remove_edge(cursor.from(), cursor.to());
            }
            black_box(graph.edge_count())
        });
    });
}

fn bench_graph_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph Traversal");

    for size in [256, 1024] {
        let graph = binary_tree(size);
        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, graph| {
            b.iter(|| black_box(graph.dfs_iter(0).count()));
        });
        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, graph| {
            b.iter(|| black_box(graph.bfs_iter(0).count()));
        });
        group.bench_with_input(BenchmarkId::new("edges", size), &graph, |b, graph| {
            b.iter(|| black_box(graph.edges().count()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_graph_build, bench_graph_remove, bench_graph_traversal);
criterion_main!(benches);
