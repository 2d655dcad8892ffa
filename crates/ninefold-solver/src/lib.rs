//! Backtracking search for the Ninefold sudoku engine.
//!
//! The solver is a classic depth-first backtracker: find the first empty
//! cell, try each legal candidate, recurse, and undo on failure. It finds
//! the first completion of a grid or proves that none exists. There is no
//! candidate bookkeeping or human-style deduction here. Search order and
//! the per-cell legality test are the whole algorithm.
//!
//! Two entry points:
//!
//! - [`solve`]: the plain deterministic function, first solution or `None`.
//! - [`BacktrackSolver`]: configurable candidate order (used by the
//!   generator for varied solutions) and an optional step budget for
//!   callers that need to bound worst-case search time.

pub use self::backtrack::{BacktrackSolver, BacktrackStats, SolveOutcome, solve};

mod backtrack;
