//! Criterion micro-benchmarks for tile classification.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use warren_tiles::classify;

/// Benchmark: classify a 63×63 spanning-tree maze (~4K cells).
fn bench_classify_63(c: &mut Criterion) {
    let maze = warren_maze::generate(63, 63, 42).unwrap();

    c.bench_function("classify_63x63", |b| {
        b.iter(|| {
            let map = classify(black_box(&maze));
            black_box(&map);
        });
    });
}

/// Benchmark: classify the reference 31×21 play size.
fn bench_classify_play_size(c: &mut Criterion) {
    let maze = warren_maze::generate(31, 21, 7).unwrap();

    c.bench_function("classify_31x21", |b| {
        b.iter(|| {
            let map = classify(black_box(&maze));
            black_box(&map);
        });
    });
}

criterion_group!(benches, bench_classify_63, bench_classify_play_size);
criterion_main!(benches);
