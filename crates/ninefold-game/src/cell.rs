//! Per-cell session state.

use ninefold_core::Digit;

/// The state of one cell during play.
///
/// The distinction between [`Given`](CellState::Given) and
/// [`Filled`](CellState::Filled) exists only at the session layer. The
/// underlying [`Grid`](ninefold_core::Grid) has no notion of where a
/// digit came from. Given cells are part of the deal and can never be
/// modified or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// A clue dealt with the puzzle; immutable for the whole session.
    Given(Digit),
    /// A digit entered by the player; may be replaced or cleared.
    Filled(Digit),
    /// No digit yet.
    Empty,
}

impl CellState {
    /// Returns the digit in this cell regardless of its origin.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            CellState::Given(digit) | CellState::Filled(digit) => Some(digit),
            CellState::Empty => None,
        }
    }
}
