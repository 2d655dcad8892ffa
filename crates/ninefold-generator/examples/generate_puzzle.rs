//! Example demonstrating seeded puzzle generation.
//!
//! Generates one puzzle and prints its seed, problem, and solution as
//! 81-character grid strings.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a puzzle from its printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Or derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "daily-2026-08-04"
//! ```

use clap::Parser;
use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle difficulty (easy, medium, or hard).
    #[arg(long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Exact seed as 64 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase to hash into a seed.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match (args.seed, &args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };

    let puzzle = PuzzleGenerator::new().generate_with_seed(seed, args.difficulty);

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {} ({} clues)", puzzle.difficulty, puzzle.difficulty.clue_count());
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
