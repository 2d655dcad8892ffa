//! Play-session management for the Ninefold sudoku engine.
//!
//! The engine crates are pure functions over grids; this crate owns the
//! state a real sitting needs on top of them: which cells were dealt
//! versus entered, the cached reference solution, incorrect-cell markers,
//! and the attempt and hint budgets. Rendering and input handling belong
//! to whatever front end embeds a [`Game`].
//!
//! # Examples
//!
//! ```
//! use ninefold_core::Position;
//! use ninefold_game::Game;
//! use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let puzzle = PuzzleGenerator::new()
//!     .generate_with_seed(PuzzleSeed::from_phrase("crate docs"), Difficulty::Easy);
//! let mut game = Game::new(puzzle);
//!
//! // Ask for a hint on the first open cell.
//! let pos = Position::ALL
//!     .into_iter()
//!     .find(|&pos| game.cell(pos).is_empty())
//!     .unwrap();
//! let digit = game.hint(pos).unwrap();
//! assert_eq!(game.solution()[pos], Some(digit));
//! assert_eq!(game.hints_remaining(), 4);
//! ```

pub use self::{
    cell::CellState,
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_HINTS, EntryOutcome, Game},
};

mod cell;
mod game;

/// Errors a play session can report.
///
/// These are rule-of-the-session violations, not engine failures: the
/// board itself accepts any digit anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The targeted cell is part of the deal and cannot be changed.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// Every attempt has been used; only reset or hints remain.
    #[display("no attempts remaining")]
    AttemptsExhausted,
    /// Every hint has been used.
    #[display("no hints remaining")]
    HintsExhausted,
    /// The board as currently played cannot be completed.
    #[display("current board has no solution")]
    BoardUnsolvable,
}
