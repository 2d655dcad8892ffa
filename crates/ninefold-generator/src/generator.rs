//! Seeded puzzle generation.

use ninefold_core::{Digit, Grid, Position};
use ninefold_solver::BacktrackSolver;
use rand::{RngExt as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{Difficulty, PuzzleSeed};

/// A generated puzzle together with the solution it was carved from.
///
/// The `solution` is the answer key: every clue in `problem` agrees with
/// it, so it witnesses that the puzzle is solvable. Nothing guarantees it
/// is the only completion (carving does not check uniqueness).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid, with `difficulty.removed_cells()` cells empty.
    pub problem: Grid,
    /// The fully solved grid the problem was carved from.
    pub solution: Grid,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
    /// The difficulty the puzzle was generated at.
    pub difficulty: Difficulty,
}

/// Generates sudoku puzzles by carving cells out of a solved grid.
///
/// Generation runs in two stages, both driven by one seeded PRNG:
///
/// 1. **Seed a solution.** The backtracking solver runs on an empty grid
///    with a shuffled candidate order. Shuffling matters: with the default
///    ascending order the search would return the same solved grid every
///    time, and all puzzles would share one answer key.
/// 2. **Carve the problem.** Uniformly random cells are cleared, retrying
///    already-empty picks, until the difficulty's removal count is
///    reached. No symmetry, no minimal-clue pruning, and no uniqueness
///    check. The seed solution is the only solvability witness.
///
/// # Examples
///
/// ```
/// use ninefold_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
/// assert_eq!(puzzle.problem.filled_count(), 41);
/// assert!(puzzle.solution.is_solved());
/// ```
///
/// Reproducible generation via an explicit seed:
///
/// ```
/// use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_phrase("daily-2026-08-04");
/// let today = generator.generate_with_seed(seed, Difficulty::Hard);
/// let again = generator.generate_with_seed(seed, Difficulty::Hard);
/// assert_eq!(today, again);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// The seed is recorded on the returned puzzle, so any puzzle can be
    /// regenerated later with [`generate_with_seed`](Self::generate_with_seed).
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random(), difficulty)
    }

    /// Generates the puzzle identified by `seed` and `difficulty`.
    ///
    /// Deterministic: the same seed and difficulty always produce the
    /// same problem and solution.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed, difficulty: Difficulty) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = seeded_solution(&mut rng);
        let problem = carve(&solution, difficulty, &mut rng);
        log::debug!(
            "generated {difficulty} puzzle ({} clues) from seed {seed}",
            problem.filled_count()
        );
        GeneratedPuzzle {
            problem,
            solution,
            seed,
            difficulty,
        }
    }
}

/// Completes an empty grid with a per-seed shuffled candidate order.
fn seeded_solution(rng: &mut Pcg64) -> Grid {
    let mut order = Digit::ALL;
    order.shuffle(rng);
    BacktrackSolver::new()
        .digit_order(order)
        .solve(&Grid::EMPTY)
        .into_solution()
        .unwrap_or_else(|| unreachable!("an empty grid always has a completion"))
}

/// Clears uniformly random cells until exactly the requested number are
/// gone. Re-picking an already-empty cell is a no-op retry, not an error.
fn carve(solution: &Grid, difficulty: Difficulty, rng: &mut Pcg64) -> Grid {
    let mut problem = solution.clone();
    let mut removed = 0;
    while removed < difficulty.removed_cells() {
        let pos = Position::new(rng.random_range(0..9), rng.random_range(0..9));
        if problem[pos].is_some() {
            problem.set(pos, None);
            removed += 1;
        }
    }
    problem
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn seed(phrase: &str) -> PuzzleSeed {
        PuzzleSeed::from_phrase(phrase)
    }

    #[test]
    fn test_clue_count_matches_difficulty() {
        let generator = PuzzleGenerator::new();
        for difficulty in Difficulty::ALL {
            let puzzle = generator.generate_with_seed(seed("cardinality"), difficulty);
            assert_eq!(puzzle.problem.filled_count(), difficulty.clue_count());
            assert_eq!(puzzle.solution.filled_count(), 81);
        }
    }

    #[test]
    fn test_problem_agrees_with_solution() {
        let puzzle = PuzzleGenerator::new().generate_with_seed(seed("agreement"), Difficulty::Medium);
        assert!(puzzle.solution.is_solved());
        assert!(puzzle.problem.is_valid());
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem[pos] {
                assert_eq!(puzzle.solution[pos], Some(digit));
            }
        }
    }

    #[test]
    fn test_generated_puzzle_is_solvable() {
        let puzzle = PuzzleGenerator::new().generate_with_seed(seed("solvable"), Difficulty::Hard);
        // The solver need not rediscover the seed solution (hard puzzles
        // may have several completions), but it must find one.
        let found = ninefold_solver::solve(&puzzle.problem).unwrap();
        assert!(found.is_solved());
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = PuzzleGenerator::new();
        let a = generator.generate_with_seed(seed("replay"), Difficulty::Easy);
        let b = generator.generate_with_seed(seed("replay"), Difficulty::Easy);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_vary_the_solution() {
        // The candidate order of the seed solve is shuffled per seed, so
        // different seeds produce different answer keys, not just
        // different carvings of one fixed grid.
        let generator = PuzzleGenerator::new();
        let solutions: Vec<Grid> = ["variety one", "variety two", "variety three"]
            .into_iter()
            .map(|phrase| generator.generate_with_seed(seed(phrase), Difficulty::Easy).solution)
            .collect();
        assert!(solutions.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_fresh_seeds_are_recorded() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator.generate(Difficulty::Medium);
        let replayed = generator.generate_with_seed(puzzle.seed, puzzle.difficulty);
        assert_eq!(puzzle, replayed);
    }

    fn arbitrary_seed() -> impl Strategy<Value = PuzzleSeed> {
        proptest::array::uniform32(proptest::num::u8::ANY).prop_map(PuzzleSeed::from_bytes)
    }

    fn arbitrary_difficulty() -> impl Strategy<Value = Difficulty> {
        prop_oneof![
            Just(Difficulty::Easy),
            Just(Difficulty::Medium),
            Just(Difficulty::Hard),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_generation_invariants(
            seed in arbitrary_seed(),
            difficulty in arbitrary_difficulty(),
        ) {
            let puzzle = PuzzleGenerator::new().generate_with_seed(seed, difficulty);
            prop_assert!(puzzle.solution.is_solved());
            prop_assert!(puzzle.problem.is_valid());
            prop_assert_eq!(puzzle.problem.filled_count(), difficulty.clue_count());
            for pos in Position::ALL {
                if let Some(digit) = puzzle.problem[pos] {
                    prop_assert_eq!(puzzle.solution[pos], Some(digit));
                }
            }
        }
    }
}
