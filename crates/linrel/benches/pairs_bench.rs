//! Criterion benchmarks for the all-pairs line analyzer.
//! Focus sizes: n in {2, 10, 20, 50} (inputs are human-entered line counts).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use linrel::lines::analyze_all;
use linrel::lines::rand::{draw_lines, CoeffCfg, ReplayToken};

fn bench_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairs");
    for &n in &[2usize, 10, 20, 50] {
        group.bench_with_input(BenchmarkId::new("analyze_all", n), &n, |b, &n| {
            b.iter_batched(
                || draw_lines(n, CoeffCfg::default(), ReplayToken { seed: 43, index: 0 }),
                |lines| {
                    let _res = analyze_all(&lines);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pairs);
criterion_main!(benches);
