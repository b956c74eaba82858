//! Spelling Bee puzzle representation and scoring

use super::LetterSet;
use std::fmt;

/// Minimum number of characters a word needs to be acceptable
pub const MINIMUM_WORD_LENGTH: usize = 5;

/// Number of distinct letters in a full pot
pub const POT_SIZE: u32 = 7;

/// Point value of a bingo (a word using every letter of the pot)
///
/// A non-bingo is always worth one point.
pub const BINGO_SCORE: u32 = 3;

/// A puzzle: the letters that may be used, and the letters that must be used
///
/// Puzzles are immutable values; two puzzles are equal when their letter sets are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Puzzle {
    pot: LetterSet,
    required: LetterSet,
}

/// Error type for puzzles parsed from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    InvalidCharacter { field: &'static str, character: char },
    EmptyRequired,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { field, character } => write!(
                f,
                "Invalid character in '{field}': '{character}' ({:x})",
                u32::from(*character)
            ),
            Self::EmptyRequired => write!(f, "Puzzle must require at least one letter"),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl Puzzle {
    /// Create a puzzle from its pot and required letters
    ///
    /// `required` must be a subset of `pot`. This is only checked in debug builds;
    /// release behavior for a violating puzzle is unspecified.
    #[inline]
    #[must_use]
    pub const fn new(pot: LetterSet, required: LetterSet) -> Self {
        debug_assert!(
            pot.contains(required),
            "required letters must be a subset of the pot"
        );
        Self { pot, required }
    }

    /// Parse a puzzle from its required and optional letters
    ///
    /// Input is case-insensitive. The pot is the union of both arguments.
    ///
    /// # Errors
    /// Returns `PuzzleError` if either argument contains a character outside the
    /// alphabet, or if `required` is empty.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::{LetterSet, Puzzle};
    ///
    /// let puzzle = Puzzle::parse("C", "abdryz").unwrap();
    /// assert_eq!(puzzle.required(), LetterSet::of("c"));
    /// assert_eq!(puzzle.pot(), LetterSet::of("abcdryz"));
    ///
    /// assert!(Puzzle::parse("c", "ab-dry").is_err());
    /// ```
    pub fn parse(required: &str, optional: &str) -> Result<Self, PuzzleError> {
        let required = parse_letters("required", required)?;
        let optional = parse_letters("optional", optional)?;
        if required.is_empty() {
            return Err(PuzzleError::EmptyRequired);
        }
        Ok(Self::new(required | optional, required))
    }

    /// All letters that may be used, including the required ones
    #[inline]
    #[must_use]
    pub const fn pot(&self) -> LetterSet {
        self.pot
    }

    /// Letters that every answer must use
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// Letters that may, but need not, appear in an answer
    #[inline]
    #[must_use]
    pub const fn optional(&self) -> LetterSet {
        LetterSet::from_bits(self.pot.bits() & !self.required.bits())
    }
}

fn parse_letters(field: &'static str, text: &str) -> Result<LetterSet, PuzzleError> {
    let lower = text.to_lowercase();
    if let Some(character) = lower.chars().find(|c| !c.is_ascii_lowercase()) {
        return Err(PuzzleError::InvalidCharacter { field, character });
    }
    Ok(LetterSet::of(&lower))
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]{}", self.required, self.optional())
    }
}

/// Point value of a single word: [`BINGO_SCORE`] for a bingo, otherwise 1
#[must_use]
pub fn word_value(word: &str) -> u32 {
    if LetterSet::of(word).len() >= POT_SIZE {
        BINGO_SCORE
    } else {
        1
    }
}

/// Total score of a collection of words
///
/// Words are assumed to already be made of lowercase letters.
///
/// # Examples
/// ```
/// use spelling_bee::core::score;
///
/// assert_eq!(score(["tenet", "teeth", "length"]), 3);
/// assert_eq!(score(["length", "lengthened"]), 4);
/// ```
pub fn score<I>(words: I) -> u32
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words.into_iter().map(|word| word_value(word.as_ref())).sum()
}
