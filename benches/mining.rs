use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use traceprof::{compress, mine, score};

/// Generate a trace of repeating label phrases
fn generate_periodic_trace(size: usize) -> Vec<u8> {
    let phrase = [0u8, 1, 1, 2, 2, 2, 0, 3];
    (0..size).map(|i| phrase[i % phrase.len()]).collect()
}

/// Generate a low-repetition trace (LCG noise over a small alphabet)
fn generate_noisy_trace(size: usize, alphabet: u8) -> Vec<u8> {
    let mut seed = 12345u64;
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (seed % alphabet as u64) as u8
        })
        .collect()
}

fn bench_mine_periodic(c: &mut Criterion) {
    let sizes = [200, 1_000, 5_000];
    let mut group = c.benchmark_group("mine_periodic");

    for size in sizes.iter() {
        let trace = generate_periodic_trace(*size);

        group.bench_with_input(BenchmarkId::new("mine", size), &trace, |b, trace| {
            b.iter(|| black_box(mine(black_box(trace), 64, 3).unwrap()));
        });
    }

    group.finish();
}

fn bench_mine_noisy(c: &mut Criterion) {
    let sizes = [200, 1_000, 5_000];
    let mut group = c.benchmark_group("mine_noisy");

    for size in sizes.iter() {
        let trace = generate_noisy_trace(*size, 6);

        group.bench_with_input(BenchmarkId::new("mine", size), &trace, |b, trace| {
            b.iter(|| black_box(mine(black_box(trace), 64, 3).unwrap()));
        });
    }

    group.finish();
}

fn bench_score_full_length(c: &mut Criterion) {
    // score mines every length up to N - 1, so keep the traces small
    let sizes = [100, 300, 600];
    let mut group = c.benchmark_group("score_full_length");

    for size in sizes.iter() {
        let trace = generate_periodic_trace(*size);

        group.bench_with_input(BenchmarkId::new("score", size), &trace, |b, trace| {
            b.iter(|| black_box(score(black_box(trace), 3)));
        });
    }

    group.finish();
}

fn bench_compress(c: &mut Criterion) {
    let sizes = [1_000, 5_000];
    let mut group = c.benchmark_group("compress");

    for size in sizes.iter() {
        let trace = generate_periodic_trace(*size);
        let mining = mine(&trace, 64, 3).unwrap();

        group.bench_with_input(BenchmarkId::new("compress", size), &mining, |b, mining| {
            b.iter(|| black_box(compress(black_box(mining))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mine_periodic,
    bench_mine_noisy,
    bench_score_full_length,
    bench_compress
);
criterion_main!(benches);
