//! Benchmarks for the graph search engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rustc_hash::FxHashSet;

use graphsearch::problems::{Cell, CycleGrid, Lattice};
use graphsearch::reconstruct::format_trace;
use graphsearch::{GraphSearch, Strategy};

/// Side length of the benchmark lattice.
const SIDE: i32 = 64;

fn far_corner() -> FxHashSet<Cell> {
    [(SIDE - 1, SIDE - 1)].into_iter().collect()
}

/// Benchmark breadth-first search across the lattice diagonal.
fn bench_breadth_first(c: &mut Criterion) {
    let goals = far_corner();
    let mut engine = GraphSearch::new(Lattice::new(SIDE, SIDE));

    c.bench_function("breadth_first_lattice_64", |b| {
        b.iter(|| engine.search_breadth_first(black_box((0, 0)), &goals))
    });
}

/// Benchmark depth-first search across the lattice diagonal.
fn bench_depth_first(c: &mut Criterion) {
    let goals = far_corner();
    let mut engine = GraphSearch::new(Lattice::new(SIDE, SIDE));

    c.bench_function("depth_first_lattice_64", |b| {
        b.iter(|| engine.search_depth_first(black_box((0, 0)), &goals))
    });
}

/// Benchmark exhausting the whole lattice with an empty goal set.
fn bench_exhaustive(c: &mut Criterion) {
    let goals = FxHashSet::default();
    let mut engine = GraphSearch::new(Lattice::new(SIDE, SIDE));

    let mut group = c.benchmark_group("exhaustive");
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        group.bench_function(format!("{strategy:?}"), |b| {
            b.iter(|| engine.search_with(strategy, black_box((SIDE / 2, SIDE / 2)), &goals))
        });
    }
    group.finish();
}

/// Benchmark reconstructing and formatting a solution.
fn bench_reconstruct(c: &mut Criterion) {
    let goals = far_corner();
    let mut engine = GraphSearch::new(Lattice::new(SIDE, SIDE));
    let _ = engine.search_breadth_first((0, 0), &goals);

    c.bench_function("solution_and_path", |b| {
        b.iter(|| {
            let solution = black_box(&engine).solution();
            let path = black_box(&engine).path();
            (solution, path)
        })
    });

    c.bench_function("format_trace", |b| {
        let solution = engine.solution().unwrap_or_default();
        let path = engine.path().unwrap_or_default();
        b.iter(|| format_trace(black_box(&path), black_box(&solution)))
    });
}

/// Benchmark repeated small searches on the cyclic grid.
fn bench_cycle_grid(c: &mut Criterion) {
    let goals: FxHashSet<i32> = [3].into_iter().collect();
    let mut engine = GraphSearch::new(CycleGrid);

    c.bench_function("cycle_grid_depth_first", |b| {
        b.iter(|| engine.search_depth_first(black_box(8), &goals))
    });
}

criterion_group!(
    benches,
    bench_breadth_first,
    bench_depth_first,
    bench_exhaustive,
    bench_reconstruct,
    bench_cycle_grid
);
criterion_main!(benches);
