//! Puzzle difficulty levels.

use std::str::FromStr;

/// How hard a generated puzzle should be.
///
/// Difficulty is measured purely by how many cells are carved out of the
/// solved seed grid. More removals leave fewer clues. There is no
/// technique-based grading here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Difficulty {
    /// 40 cells removed, 41 clues remain.
    #[display("easy")]
    Easy,
    /// 50 cells removed, 31 clues remain.
    #[display("medium")]
    Medium,
    /// 60 cells removed, 21 clues remain.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The number of cells the generator clears from the solved seed grid.
    #[must_use]
    pub const fn removed_cells(self) -> usize {
        match self {
            Self::Easy => 40,
            Self::Medium => 50,
            Self::Hard => 60,
        }
    }

    /// The number of clues left in a generated puzzle (81 minus
    /// [`removed_cells`](Self::removed_cells)).
    #[must_use]
    pub const fn clue_count(self) -> usize {
        81 - self.removed_cells()
    }
}

/// An error encountered while parsing a difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {name:?}, expected easy, medium, or hard")]
pub struct ParseDifficultyError {
    /// The string that failed to parse.
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError { name: s.to_owned() })
    }
}
