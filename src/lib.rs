#![warn(missing_docs)]

//! # Wordseeker
//!
//! A crate that generates word-search puzzles: words are hidden in a square
//! letter grid along difficulty-scoped directions, every leftover cell is
//! filled with a random letter, and drag selections can be matched back to
//! the hidden words.
//!
//! All randomness is drawn from an injected [`rand::Rng`], so a seeded rng
//! reproduces a puzzle exactly:
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use wordseeker::{Difficulty, Puzzle, PuzzleConfig};
//!
//! let words = [String::from("cat"), String::from("dog")];
//!
//! let puzzle = Puzzle::generate(
//!     &PuzzleConfig {
//!         grid_size: 10,
//!         difficulty: Difficulty::Hard,
//!         words: &words,
//!     },
//!     &mut StdRng::seed_from_u64(7),
//! )
//! .unwrap();
//!
//! assert!(puzzle.grid().is_complete());
//! assert!(puzzle.placed_words().len() <= words.len());
//! ```

use std::fmt::Display;

mod generator;
mod grid;
mod selection;
mod word;

pub use generator::{Difficulty, Direction, PlacedWord, Puzzle, PuzzleConfig};
pub use grid::{Cell, Grid};
pub use selection::{SelectionSession, SelectionState};
pub use word::Word;

/// An error that happened when creating the puzzle.
///
/// Both variants are input-validation failures reported before any
/// placement work begins. An unplaceable word is not an error; it is simply
/// absent from [`Puzzle::placed_words`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested grid has no cells to place words in.
    InvalidGridSize(usize),

    /// A word was empty after trimming, so it could never be placed or
    /// found.
    InvalidWord(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGridSize(size) => {
                write!(f, "Grid size {} has no cells to place words in", size)
            }
            Error::InvalidWord(text) => {
                write!(f, "Word {:?} has no letters left after trimming", text)
            }
        }
    }
}

impl std::error::Error for Error {}
