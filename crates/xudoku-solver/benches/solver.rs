//! Benchmarks for the constraint filter and the full search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use xudoku_core::{Geometry, Grid, Variant, codec};
use xudoku_solver::{FilterPass, solve};

// Solvable by propagation alone.
const EASY: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

// Forces deep backtracking; attributed to Arto Inkala.
const HARD: &str =
    "800000000003600000070090200050007000000045700000100030001000068008500010090000400";

fn puzzle(record: &str) -> Grid {
    codec::parse(record, Variant::Classic).unwrap()
}

fn bench_filter_pass(c: &mut Criterion) {
    let puzzles = [
        ("easy", puzzle(EASY)),
        ("empty", Grid::new(Geometry::classic(3).unwrap())),
    ];

    let pass = FilterPass::new();

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("filter_pass", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let changed = pass.apply(grid);
                    hint::black_box(changed)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("easy", puzzle(EASY)),
        ("hard", puzzle(HARD)),
        ("empty_9x9", Grid::new(Geometry::classic(3).unwrap())),
        ("empty_16x16", Grid::new(Geometry::classic(4).unwrap())),
    ];

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter_batched(
                || hint::black_box(grid.clone()),
                |grid| {
                    let outcome = solve(grid);
                    hint::black_box(outcome)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_filter_pass, bench_solve);
criterion_main!(benches);
