//! SortedVec benchmark.
//!
//! Compares bulk construction (`from`, `from_sorted_vec`) against repeated
//! `insert`, and measures lookup throughput against a linear scan.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sortwise::sorted::SortedVec;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Deterministic scrambled values with duplicates.
fn generate_unsorted_vec(size: i32) -> Vec<i32> {
    (0..size).map(|value| (value * 7919) % (size / 2 + 1)).collect()
}

fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_vec_construction");

    for size in SIZES {
        let unsorted = generate_unsorted_vec(size);
        let mut presorted = unsorted.clone();
        presorted.sort_unstable();

        group.bench_with_input(BenchmarkId::new("from_unsorted", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || unsorted.clone(),
                |elements| black_box(SortedVec::from(black_box(elements))),
                batch_size_for(size),
            );
        });

        group.bench_with_input(BenchmarkId::new("from_sorted_vec", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || presorted.clone(),
                |elements| black_box(SortedVec::from_sorted_vec(black_box(elements))),
                batch_size_for(size),
            );
        });

        group.bench_with_input(BenchmarkId::new("repeated_insert", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || unsorted.clone(),
                |elements| {
                    let mut sorted = SortedVec::with_capacity(elements.len());
                    for element in elements {
                        sorted.insert(black_box(element));
                    }
                    black_box(sorted)
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_vec_lookup");

    for size in SIZES {
        let sorted = SortedVec::from(generate_unsorted_vec(size));

        group.bench_with_input(BenchmarkId::new("first_index_of", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for target in 0..size {
                    black_box(sorted.first_index_of(&target));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("linear_position", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for target in 0..size {
                    black_box(sorted.iter().position(|value| *value == target));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_construction, benchmark_lookup);
criterion_main!(benches);
