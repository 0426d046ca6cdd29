use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use seqsum::{DEFAULT_MAX_DEPTH, seqsum_iterative, seqsum_recursive};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("seqsum");

    for n in [100i64, 1_000, 10_000] {
        group.bench_function(format!("recursive/{n}"), |b| {
            b.iter(|| seqsum_recursive(black_box(n), DEFAULT_MAX_DEPTH))
        });
        group.bench_function(format!("iterative/{n}"), |b| b.iter(|| seqsum_iterative(black_box(n))));
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
