//! Uniqueness-constraint checking.

use crate::{DigitSet, Grid, House};

impl Grid {
    /// Returns `true` if no row, column, or 3×3 box contains the same
    /// digit twice.
    ///
    /// Empty cells never conflict, so partially filled grids validate as
    /// long as the digits placed so far are consistent. This is a total
    /// check with no failure mode: every 9×9 grid is either valid or not.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::EMPTY;
    /// grid.set(Position::new(2, 0), Some(Digit::D5));
    /// grid.set(Position::new(2, 8), Some(Digit::D5));
    /// assert!(!grid.is_valid()); // two 5s in row 2
    ///
    /// grid.set(Position::new(2, 8), None);
    /// assert!(grid.is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        House::ALL.into_iter().all(|house| self.house_is_valid(house))
    }

    /// Returns `true` if the grid is completely filled and [`is_valid`]
    /// holds, i.e. the grid is a solution.
    ///
    /// [`is_valid`]: Self::is_valid
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_valid()
    }

    fn house_is_valid(&self, house: House) -> bool {
        let mut seen = DigitSet::EMPTY;
        house
            .positions()
            .into_iter()
            .filter_map(|pos| self[pos])
            .all(|digit| seen.insert(digit))
    }
}
