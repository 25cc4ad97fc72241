//! Benchmarks for the non-attacking arrangement counter.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nonattacking::attacks::is_queen_free;
use nonattacking::grid::{canonical_key, format_placement};
use nonattacking::solver::{count_board, fundamental_solutions, Metrics};
use nonattacking::{Board, Placement, Strategy};

/// Benchmark the 8-queens permutation run with symmetry deduplication.
fn bench_permutation_8(c: &mut Criterion) {
    let board = Board::square(8).unwrap();
    let metrics = Metrics::for_strategy(Strategy::Permutation);

    c.bench_function("permutation_8", |b| {
        b.iter(|| count_board(Strategy::Permutation, black_box(board), metrics))
    });
}

/// Benchmark the 5x5 combination run (C(25, 5) candidates).
fn bench_combination_5(c: &mut Criterion) {
    let board = Board::square(5).unwrap();
    let metrics = Metrics::for_strategy(Strategy::Combination);

    let mut group = c.benchmark_group("combination");
    group.sample_size(10);
    group.bench_function("size_5", |b| {
        b.iter(|| count_board(Strategy::Combination, black_box(board), metrics))
    });
    group.finish();
}

/// Benchmark the queen predicate on a valid 8-queens solution.
fn bench_is_queen_free(c: &mut Criterion) {
    let placement = Placement::from_permutation(&[0, 4, 7, 5, 2, 6, 1, 3]);

    c.bench_function("is_queen_free", |b| {
        b.iter(|| is_queen_free(black_box(&placement)))
    });
}

/// Benchmark computing the canonical key for a solution.
fn bench_canonical_key(c: &mut Criterion) {
    let placement = Placement::from_permutation(&[0, 4, 7, 5, 2, 6, 1, 3]);

    c.bench_function("canonical_key", |b| {
        b.iter(|| canonical_key(black_box(&placement)))
    });
}

/// Benchmark formatting a solution for display.
fn bench_format_placement(c: &mut Criterion) {
    let solutions = fundamental_solutions(8).unwrap();
    let placement = solutions.iter().next().unwrap();

    c.bench_function("format_placement", |b| {
        b.iter(|| format_placement(black_box(placement)))
    });
}

criterion_group!(
    benches,
    bench_permutation_8,
    bench_combination_5,
    bench_is_queen_free,
    bench_canonical_key,
    bench_format_placement
);
criterion_main!(benches);
