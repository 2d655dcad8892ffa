//! The play session.

use ninefold_core::{Digit, Grid, Position};
use ninefold_generator::GeneratedPuzzle;

use crate::{CellState, GameError};

/// Number of wrong entries allowed before the session locks.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Number of hints available per session.
pub const DEFAULT_MAX_HINTS: u32 = 5;

/// The result of entering a digit, as judged against the reference
/// solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The entry matches the reference solution.
    Correct,
    /// The entry differs from the reference solution; one attempt was
    /// consumed.
    Incorrect {
        /// Attempts left after this mistake.
        attempts_remaining: u32,
    },
}

/// A sudoku play session.
///
/// Owns everything the engine itself refuses to track: which cells were
/// dealt versus entered, the reference solution (cached once per puzzle,
/// never recomputed per entry), the incorrect-cell markers, and the
/// attempt and hint budgets. The engine crates stay pure; all session
/// state lives here.
///
/// # Examples
///
/// ```
/// use ninefold_game::Game;
/// use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let puzzle = PuzzleGenerator::new()
///     .generate_with_seed(PuzzleSeed::from_phrase("docs"), Difficulty::Easy);
/// let game = Game::new(puzzle);
///
/// assert!(!game.is_solved());
/// assert_eq!(game.attempts_remaining(), 3);
/// assert_eq!(game.hints_remaining(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: Grid,
    incorrect: [bool; 81],
    attempts_used: u32,
    max_attempts: u32,
    hints_used: u32,
    max_hints: u32,
}

impl Game {
    /// Starts a session with the default attempt and hint budgets.
    ///
    /// Every clue in the puzzle's problem grid becomes an immutable given.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::with_budgets(puzzle, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_HINTS)
    }

    /// Starts a session with explicit attempt and hint budgets.
    #[must_use]
    pub fn with_budgets(puzzle: GeneratedPuzzle, max_attempts: u32, max_hints: u32) -> Self {
        let GeneratedPuzzle {
            problem, solution, ..
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution,
            incorrect: [false; 81],
            attempts_used: 0,
            max_attempts,
            hints_used: 0,
            max_hints,
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the board as a plain grid (given and filled digits alike).
    #[must_use]
    pub fn current_grid(&self) -> Grid {
        let mut grid = Grid::EMPTY;
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }

    /// Returns the reference solution this session checks entries against.
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns `true` if the last entry at `pos` was judged incorrect and
    /// has not been corrected, cleared, or hinted since.
    #[must_use]
    pub const fn is_incorrect(&self, pos: Position) -> bool {
        self.incorrect[pos.index()]
    }

    /// Attempts left before the session locks.
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    /// Hints left in this session.
    #[must_use]
    pub const fn hints_remaining(&self) -> u32 {
        self.max_hints.saturating_sub(self.hints_used)
    }

    /// Returns `true` if the board is completely filled with no rule
    /// violation.
    ///
    /// Any valid completion counts, not just the reference solution.
    /// Carved puzzles can have several, and a player who finds a
    /// different one has still won.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current_grid().is_solved()
    }

    /// Enters a digit at `pos` and judges it against the reference
    /// solution.
    ///
    /// The digit lands on the board either way; a wrong entry is marked
    /// incorrect and consumes one attempt. Entering over an existing
    /// player digit replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AttemptsExhausted`] if no attempts remain,
    /// or [`GameError::CannotModifyGivenCell`] if `pos` holds a given.
    pub fn enter_digit(&mut self, pos: Position, digit: Digit) -> Result<EntryOutcome, GameError> {
        self.check_not_locked()?;
        self.check_not_given(pos)?;

        self.cells[pos.index()] = CellState::Filled(digit);
        if self.solution[pos] == Some(digit) {
            self.incorrect[pos.index()] = false;
            Ok(EntryOutcome::Correct)
        } else {
            self.attempts_used += 1;
            self.incorrect[pos.index()] = true;
            Ok(EntryOutcome::Incorrect {
                attempts_remaining: self.attempts_remaining(),
            })
        }
    }

    /// Clears a player-entered digit at `pos`.
    ///
    /// Clearing an already-empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AttemptsExhausted`] if the session is locked,
    /// or [`GameError::CannotModifyGivenCell`] if `pos` holds a given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        self.check_not_locked()?;
        self.check_not_given(pos)?;

        self.cells[pos.index()] = CellState::Empty;
        self.incorrect[pos.index()] = false;
        Ok(())
    }

    /// Reveals the solution digit at `pos`, spending one hint.
    ///
    /// The revealed digit is entered as a player digit and any incorrect
    /// marker on the cell is cleared. Hints are not gated by the attempt
    /// budget.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::HintsExhausted`] if no hints remain, or
    /// [`GameError::CannotModifyGivenCell`] if `pos` holds a given
    /// (there is nothing to reveal there).
    pub fn hint(&mut self, pos: Position) -> Result<Digit, GameError> {
        if self.hints_remaining() == 0 {
            return Err(GameError::HintsExhausted);
        }
        self.check_not_given(pos)?;

        let digit = self.solution[pos]
            .unwrap_or_else(|| unreachable!("reference solutions are complete grids"));
        self.cells[pos.index()] = CellState::Filled(digit);
        self.incorrect[pos.index()] = false;
        self.hints_used += 1;
        Ok(digit)
    }

    /// Completes the board by solving from the current position.
    ///
    /// The search starts from the board as played, so every given and
    /// every player entry is kept. Empty cells are filled as player
    /// digits and all incorrect markers are cleared. Like hints, this is
    /// not gated by the attempt budget.
    ///
    /// The completion found this way may differ from the reference
    /// solution if the player's entries steered the board toward another
    /// valid completion.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardUnsolvable`] if no completion exists
    /// from the current position; the board is left untouched.
    pub fn solve_board(&mut self) -> Result<(), GameError> {
        let solved =
            ninefold_solver::solve(&self.current_grid()).ok_or(GameError::BoardUnsolvable)?;
        for pos in Position::ALL {
            if !self.cell(pos).is_given() {
                let digit = solved[pos]
                    .unwrap_or_else(|| unreachable!("solver results are complete grids"));
                self.cells[pos.index()] = CellState::Filled(digit);
            }
        }
        self.incorrect = [false; 81];
        Ok(())
    }

    /// Returns the session to the deal: player entries are cleared and
    /// both budgets are restored. Givens are untouched.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if cell.is_filled() {
                *cell = CellState::Empty;
            }
        }
        self.incorrect = [false; 81];
        self.attempts_used = 0;
        self.hints_used = 0;
    }

    fn check_not_locked(&self) -> Result<(), GameError> {
        if self.attempts_remaining() == 0 {
            return Err(GameError::AttemptsExhausted);
        }
        Ok(())
    }

    fn check_not_given(&self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        Ok(())
    }
}
