//! Core domain types for Spelling Bee
//!
//! Letter sets, puzzles and scoring. Everything here is a pure value type with no
//! dependencies beyond the standard library.

mod letters;
mod puzzle;

pub use letters::{ALPHABET_SIZE, LetterSet};
pub use puzzle::{
    BINGO_SCORE, MINIMUM_WORD_LENGTH, POT_SIZE, Puzzle, PuzzleError, score, word_value,
};
