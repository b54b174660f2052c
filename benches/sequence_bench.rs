//! Benchmark for Sequence pipelines vs standard library equivalents.
//!
//! Compares the stable merge sort behind `Sequence::sort` with
//! `slice::sort_by`, and a filter/map chain with the equivalent iterator chain.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fluentseq::stream::{Sequence, group_by, map};
use std::hint::black_box;

fn pseudo_random(size: usize) -> Vec<u64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % 10_000
        })
        .collect()
}

// =============================================================================
// sort Benchmark
// =============================================================================

fn benchmark_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort");

    for size in [100, 1000, 10000] {
        let data = pseudo_random(size);

        group.bench_with_input(BenchmarkId::new("Sequence", size), &data, |bencher, data| {
            bencher.iter(|| {
                let sorted = Sequence::of(data.clone()).sort(|a, b| a < b);
                black_box(sorted)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec_sort_by", size), &data, |bencher, data| {
            bencher.iter(|| {
                let mut sorted = data.clone();
                sorted.sort_by(|a, b| a.cmp(b));
                black_box(sorted)
            });
        });
    }

    group.finish();
}

// =============================================================================
// filter/map Benchmark
// =============================================================================

fn benchmark_filter_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_map");

    for size in [100, 1000, 10000] {
        let data = pseudo_random(size);

        group.bench_with_input(BenchmarkId::new("Sequence", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result = map(data, |n| n * 2).filter(|n| n % 3 == 0);
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("Iterator", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result: Vec<u64> = data.iter().map(|n| n * 2).filter(|n| n % 3 == 0).collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// group_by Benchmark
// =============================================================================

fn benchmark_group_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("group_by");

    for size in [100, 1000, 10000] {
        let data = pseudo_random(size);

        group.bench_with_input(BenchmarkId::new("group_by", size), &data, |bencher, data| {
            bencher.iter(|| {
                let grouping = group_by(data, |n| *n % 64);
                black_box(grouping)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sort,
    benchmark_filter_map,
    benchmark_group_by
);
criterion_main!(benches);
