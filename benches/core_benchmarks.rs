//! Benchmarks for the core higher-order functions
//! Compares the indexed and single-pass max_by_key strategies

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use wordscan::core::{filter, map, max_by_key, max_by_key_iter};

fn make_words(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| "x".repeat(i % 13 + 1) + &i.to_string())
        .collect()
}

/// Benchmark both max_by_key strategies over growing inputs
fn bench_max_by_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_by_key");

    for size in [10, 100, 1000, 10000] {
        let words = make_words(size);

        group.bench_with_input(BenchmarkId::new("indexed", size), &words, |b, words| {
            b.iter(|| black_box(max_by_key(words, |w| w.len())))
        });

        group.bench_with_input(BenchmarkId::new("single_pass", size), &words, |b, words| {
            b.iter(|| black_box(max_by_key_iter(words.iter(), |w| w.len())))
        });
    }

    group.finish();
}

/// Benchmark filter and map against the standard iterator adapters
fn bench_filter_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_map");

    for size in [100, 10000] {
        let words = make_words(size);

        group.bench_with_input(BenchmarkId::new("filter", size), &words, |b, words| {
            b.iter(|| black_box(filter(|w: &&String| w.len() <= 3, words.iter())))
        });

        group.bench_with_input(BenchmarkId::new("std_filter", size), &words, |b, words| {
            b.iter(|| black_box(words.iter().filter(|w| w.len() <= 3).collect::<Vec<_>>()))
        });

        group.bench_with_input(BenchmarkId::new("map", size), &words, |b, words| {
            b.iter(|| black_box(map(|w: &String| w.len(), words.iter())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_max_by_key, bench_filter_map);
criterion_main!(benches);
