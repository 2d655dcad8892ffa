//! The 9×9 grid of optional digits.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, DigitSet, House, Position};

/// A 9×9 sudoku grid.
///
/// Every cell holds either a [`Digit`] or nothing. The dimensions are fixed
/// at 9×9 and the cell storage is row-major, indexed by [`Position`].
/// A `Grid` is a plain value: cloning it snapshots the board, and no
/// operation here mutates anything but the grid itself.
///
/// # Grid strings
///
/// Grids parse from and display as 81-character strings in row-major order,
/// where `1`-`9` are filled cells and `.`, `_`, or `0` are empty. Whitespace
/// is ignored on parsing, so multi-line layouts work:
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
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
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 2)], None);
/// assert_eq!(grid.filled_count(), 30);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// The grid with every cell empty.
    pub const EMPTY: Self = Self { cells: [None; 81] };

    /// Returns the cell at the given position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at the given position, overwriting any previous value.
    pub const fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.cells[pos.index()] = cell;
    }

    /// Returns the number of non-empty cells (0-81).
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Returns the union of digits in the row, column, and box containing
    /// `pos` (including the cell itself, if filled).
    ///
    /// Placing a digit at an empty `pos` keeps the grid valid exactly when
    /// the digit is absent from this set, so this is the solver's
    /// move-legality test: three 9-cell scans instead of revalidating the
    /// whole grid.
    #[must_use]
    pub fn peer_digits(&self, pos: Position) -> DigitSet {
        let houses = [
            House::Row { row: pos.row() },
            House::Column { col: pos.col() },
            House::Box {
                index: pos.box_index(),
            },
        ];
        let mut used = DigitSet::EMPTY;
        for house in houses {
            for peer in house.positions() {
                if let Some(digit) = self[peer] {
                    used.insert(digit);
                }
            }
        }
        used
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

/// An error encountered while parsing a grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {len}")]
    WrongCellCount {
        /// The number of cell characters found.
        len: usize,
    },
    /// The string contained a character that is not a cell or whitespace.
    #[display("unexpected character {ch:?} in grid string")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::EMPTY;
        let mut len = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::new(ch as u8 - b'0'),
                _ => return Err(ParseGridError::UnexpectedCharacter { ch }),
            };
            if len < 81 {
                grid.cells[len] = cell;
            }
            len += 1;
        }
        if len != 81 {
            return Err(ParseGridError::WrongCellCount { len });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(\"{self}\")")
    }
}
