//! Core data structures for the Ninefold sudoku engine.
//!
//! This crate defines the in-memory model everything else operates on:
//!
//! - [`Digit`]: type-safe digits 1-9
//! - [`Position`]: checked `(row, col)` coordinates with a derived box index
//! - [`House`]: the 27 constraint units (rows, columns, 3×3 boxes)
//! - [`DigitSet`]: a 9-bit set of digits used for duplicate and legality checks
//! - [`Grid`]: the 9×9 board of optional digits, with parsing, display,
//!   and the uniqueness validator ([`Grid::is_valid`], [`Grid::is_solved`])
//!
//! The model is deliberately value-oriented: a [`Grid`] is 81 optional
//! digits and nothing more. Solving and generation live in their own
//! crates and treat grids as snapshots passed by value.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::EMPTY;
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//! grid.set(Position::new(0, 1), Some(Digit::D5));
//! assert!(!grid.is_valid()); // duplicate in row 0
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
mod validate;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    house::House,
    position::Position,
};
