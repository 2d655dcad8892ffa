//! Depth-first backtracking search over a single working grid.

use ninefold_core::{Digit, DigitSet, Grid};

/// The result of a backtracking search.
///
/// "No solution" is an expected outcome, not an error: an unsatisfiable
/// grid is a perfectly well-formed input whose search space happens to be
/// empty. [`BudgetExhausted`](SolveOutcome::BudgetExhausted) is kept
/// separate so callers can distinguish "proved unsatisfiable" from
/// "gave up early".
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// A completed grid: valid, fully filled, and agreeing with every
    /// filled cell of the input.
    Solved(Grid),
    /// The search space was exhausted without finding a completion.
    NoSolution,
    /// The configured step budget ran out before the search finished.
    BudgetExhausted,
}

impl SolveOutcome {
    /// Returns the solved grid, discarding the outcome wrapper.
    #[must_use]
    pub fn into_solution(self) -> Option<Grid> {
        match self {
            SolveOutcome::Solved(grid) => Some(grid),
            SolveOutcome::NoSolution | SolveOutcome::BudgetExhausted => None,
        }
    }

    /// Returns a reference to the solved grid, if any.
    #[must_use]
    pub fn solution(&self) -> Option<&Grid> {
        match self {
            SolveOutcome::Solved(grid) => Some(grid),
            SolveOutcome::NoSolution | SolveOutcome::BudgetExhausted => None,
        }
    }
}

/// Counters describing a finished search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackStats {
    placements: usize,
    backtracks: usize,
}

impl BacktrackStats {
    /// Number of tentative digit placements tried.
    #[must_use]
    pub const fn placements(&self) -> usize {
        self.placements
    }

    /// Number of placements that were undone after their subtree failed.
    #[must_use]
    pub const fn backtracks(&self) -> usize {
        self.backtracks
    }
}

/// Marker for an exhausted step budget; unwinds the recursion via `?`.
struct OutOfSteps;

/// A depth-first backtracking sudoku solver.
///
/// The search always targets the first empty cell in row-major order and
/// tries candidates in a fixed digit order, ascending by default, so
/// repeated solves of the same grid return the same completion. The
/// candidate order is configurable so callers that want varied solutions
/// (the puzzle generator shuffles it per seed) can inject their own; the
/// search itself contains no randomness.
///
/// Internally the solver mutates one owned working copy of the input:
/// each tentative placement is written in place, and undone in place when
/// its subtree fails. The input grid is never modified.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::BacktrackSolver;
///
/// let grid: Grid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()
/// .unwrap();
///
/// let outcome = BacktrackSolver::new().solve(&grid);
/// let solution = outcome.into_solution().expect("this puzzle is solvable");
/// assert!(solution.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackSolver {
    digit_order: [Digit; 9],
    step_budget: Option<usize>,
}

impl Default for BacktrackSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BacktrackSolver {
    /// Creates a solver with ascending candidate order and no step budget.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            digit_order: Digit::ALL,
            step_budget: None,
        }
    }

    /// Sets the candidate order tried at every cell.
    ///
    /// The order must be a permutation of all nine digits; it is usually
    /// a shuffled copy of [`Digit::ALL`].
    ///
    /// # Panics
    ///
    /// Panics if `order` does not contain every digit exactly once.
    #[must_use]
    pub fn digit_order(mut self, order: [Digit; 9]) -> Self {
        assert!(
            DigitSet::from_iter(order).len() == 9,
            "digit order must be a permutation of all nine digits"
        );
        self.digit_order = order;
        self
    }

    /// Caps the number of tentative placements the search may try.
    ///
    /// Plain backtracking is exponential in the worst case; a budget lets
    /// callers bound that cost and observe the cutoff as
    /// [`SolveOutcome::BudgetExhausted`]. Without a budget the search runs
    /// to completion, however long that takes.
    #[must_use]
    pub const fn step_budget(mut self, budget: usize) -> Self {
        self.step_budget = Some(budget);
        self
    }

    /// Searches for a completion of `grid`.
    ///
    /// Returns the first completion found, [`SolveOutcome::NoSolution`]
    /// once every branch has been ruled out (including when the input
    /// already violates a constraint), or
    /// [`SolveOutcome::BudgetExhausted`] if a configured budget ran out.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> SolveOutcome {
        self.solve_with_stats(grid).0
    }

    /// Like [`solve`](Self::solve), also reporting search counters.
    #[must_use]
    pub fn solve_with_stats(&self, grid: &Grid) -> (SolveOutcome, BacktrackStats) {
        let mut stats = BacktrackStats::default();

        // A grid that already breaks a constraint has no completion, and
        // a full invalid grid must not be echoed back as a solution.
        if !grid.is_valid() {
            return (SolveOutcome::NoSolution, stats);
        }

        let mut work = grid.clone();
        let mut remaining = self.step_budget;
        let outcome = match self.search(&mut work, &mut remaining, &mut stats) {
            Ok(true) => SolveOutcome::Solved(work),
            Ok(false) => SolveOutcome::NoSolution,
            Err(OutOfSteps) => SolveOutcome::BudgetExhausted,
        };
        (outcome, stats)
    }

    /// Recursive step: `Ok(true)` solved, `Ok(false)` subtree exhausted.
    ///
    /// Depth is bounded by the number of empty cells (at most 81), since
    /// every recursion fills one cell.
    fn search(
        &self,
        grid: &mut Grid,
        remaining: &mut Option<usize>,
        stats: &mut BacktrackStats,
    ) -> Result<bool, OutOfSteps> {
        let Some(pos) = grid.first_empty() else {
            return Ok(true);
        };

        let used = grid.peer_digits(pos);
        for digit in self.digit_order {
            if used.contains(digit) {
                continue;
            }
            if let Some(remaining) = remaining {
                *remaining = remaining.checked_sub(1).ok_or(OutOfSteps)?;
            }
            stats.placements += 1;
            grid.set(pos, Some(digit));
            if self.search(grid, remaining, stats)? {
                return Ok(true);
            }
            // The subtree under this candidate is dead; restore the cell
            // before trying the next one.
            grid.set(pos, None);
            stats.backtracks += 1;
        }
        Ok(false)
    }
}

/// Searches for a completion of `grid` with the default deterministic
/// candidate order.
///
/// This is the plain functional entry point: `None` means the grid has no
/// completion. Repeated calls on the same grid return the same solution.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
///
/// let solution = ninefold_solver::solve(&Grid::EMPTY).unwrap();
/// assert!(solution.is_solved());
///
/// // Two 3s in one row: provably unsatisfiable.
/// let mut grid = Grid::EMPTY;
/// grid.set(Position::new(0, 0), Some(Digit::D3));
/// grid.set(Position::new(0, 5), Some(Digit::D3));
/// assert_eq!(ninefold_solver::solve(&grid), None);
/// ```
#[must_use]
pub fn solve(grid: &Grid) -> Option<Grid> {
    BacktrackSolver::new().solve(grid).into_solution()
}
