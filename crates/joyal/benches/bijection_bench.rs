//! Criterion benchmarks for both bijection directions.
//! Focus sizes: n in {5, 10, 20, 50}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use joyal::bijection::{function_to_tree, tree_to_function};
use joyal::sample::{marked_tree, self_map, ReplayToken, SampleCfg};

fn bench_bijection(c: &mut Criterion) {
    let mut group = c.benchmark_group("bijection");
    for &n in &[5usize, 10, 20, 50] {
        group.bench_with_input(BenchmarkId::new("tree_to_function", n), &n, |b, &n| {
            b.iter_batched(
                || marked_tree(&SampleCfg { n }, ReplayToken { seed: 43, index: 0 }).unwrap(),
                |(tree, start, end)| {
                    let _res = tree_to_function(&tree, start, end).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("function_to_tree", n), &n, |b, &n| {
            b.iter_batched(
                || self_map(&SampleCfg { n }, ReplayToken { seed: 44, index: 0 }).unwrap(),
                |f| {
                    let _res = function_to_tree(&f);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bijection);
criterion_main!(benches);
