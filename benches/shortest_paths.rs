//! All-pairs shortest path benchmarks
//!
//! Run with:
//! cargo bench --bench shortest_paths

use apsp_bench::algorithm::{bellman_ford, dijkstra, floyd_warshall, johnson};
use apsp_bench::graph::generate_seeded;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    group.sample_size(10);

    // (nodes, density): dense vs sparse at comparable sizes
    for &(nodes, density) in &[(60, 0.8), (60, 0.1), (120, 0.8), (120, 0.1)] {
        let graph = generate_seeded(nodes, density, false, Some(42)).unwrap();
        let label = format!("{}n_{}d", nodes, density);

        group.bench_with_input(BenchmarkId::new("floyd_warshall", &label), &graph, |b, g| {
            b.iter(|| floyd_warshall::all_pairs(g))
        });
        group.bench_with_input(BenchmarkId::new("johnson", &label), &graph, |b, g| {
            b.iter(|| johnson::all_pairs(g).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("dijkstra_v_times", &label), &graph, |b, g| {
            b.iter(|| dijkstra::all_pairs(g).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford_v_times", &label), &graph, |b, g| {
            b.iter(|| bellman_ford::all_pairs(g).unwrap())
        });
    }

    group.finish();
}

fn bench_negative_weights(c: &mut Criterion) {
    let mut group = c.benchmark_group("negative_weights");
    group.sample_size(10);

    let graph = generate_seeded(120, 0.1, true, Some(7)).unwrap();
    group.bench_function("floyd_warshall", |b| b.iter(|| floyd_warshall::all_pairs(&graph)));
    group.bench_function("johnson", |b| b.iter(|| johnson::all_pairs(&graph).unwrap()));
    group.bench_function("bellman_ford_v_times", |b| {
        b.iter(|| bellman_ford::all_pairs(&graph).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_all_pairs, bench_negative_weights);
criterion_main!(benches);
