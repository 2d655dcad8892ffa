//! Benchmarks for the backtracking solver.
//!
//! Measures three representative inputs:
//!
//! - **`empty`**: the all-empty grid, the generator's seeding workload.
//! - **`clued`**: a well-known 30-clue puzzle with a unique solution.
//! - **`unsatisfiable`**: a consistent grid whose first empty cell has no
//!   candidate, the cheapest possible refutation.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use ninefold_core::{Digit, Grid, Position};
use ninefold_solver::BacktrackSolver;

const CLUED: &str = "
    53. .7. ...
    6.. 195 ...
    .98 ... .6.
    8.. .6. ..3
    4.. 8.3 ..1
    7.. .2. ..6
    .6. ... 28.
    ... 419 ..5
    ... .8. .79
";

fn unsatisfiable_grid() -> Grid {
    let mut grid = Grid::EMPTY;
    for (col, digit) in (0..8).zip(Digit::ALL) {
        grid.set(Position::new(0, col), Some(digit));
    }
    grid.set(Position::new(4, 8), Some(Digit::D9));
    grid
}

fn bench_backtrack(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let clued: Grid = CLUED.parse().unwrap();
    let unsatisfiable = unsatisfiable_grid();

    c.bench_function("backtrack_empty", |b| {
        b.iter(|| solver.solve(hint::black_box(&Grid::EMPTY)));
    });
    c.bench_function("backtrack_clued", |b| {
        b.iter(|| solver.solve(hint::black_box(&clued)));
    });
    c.bench_function("backtrack_unsatisfiable", |b| {
        b.iter(|| solver.solve(hint::black_box(&unsatisfiable)));
    });
}

criterion_group!(benches, bench_backtrack);
criterion_main!(benches);
