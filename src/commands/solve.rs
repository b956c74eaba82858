//! Puzzle solving command
//!
//! Finds every answer to a puzzle and orders them for display.

use crate::core::{LetterSet, POT_SIZE, Puzzle, word_value};
use crate::solver::WordIndex;
use log::warn;
use std::cmp::Reverse;

/// A single answer and its point value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionEntry {
    pub word: String,
    pub value: u32,
}

/// Result of solving a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub puzzle: Puzzle,
    /// Most distinct letters first, then longest, then alphabetical
    pub entries: Vec<SolutionEntry>,
    pub score: u32,
}

impl SolveReport {
    /// Number of answers using every letter of the pot
    #[must_use]
    pub fn bingo_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| LetterSet::of(&entry.word) == self.puzzle.pot())
            .count()
    }
}

/// Solve a puzzle against the index
///
/// Pots larger than [`POT_SIZE`] are solved all the same, but the cost doubles with
/// every extra letter, so they are logged as a warning.
///
/// # Examples
/// ```
/// use spelling_bee::commands::solve_puzzle;
/// use spelling_bee::core::Puzzle;
/// use spelling_bee::solver::WordIndex;
///
/// let index = WordIndex::new(["lengthened", "lengthen", "tenet", "deleted"]);
/// let report = solve_puzzle(&index, Puzzle::parse("e", "dghntl").unwrap());
///
/// assert_eq!(report.entries[0].word, "lengthened");
/// assert_eq!(report.score, 6);
/// ```
#[must_use]
pub fn solve_puzzle(index: &WordIndex, puzzle: Puzzle) -> SolveReport {
    if puzzle.pot().len() > POT_SIZE {
        warn!(
            "puzzle {puzzle} has {} letters, more than {POT_SIZE}; walking {} subsets",
            puzzle.pot().len(),
            1_u64 << puzzle.optional().len()
        );
    }
    let mut words: Vec<&str> = index.solutions_to(&puzzle).into_iter().collect();
    words.sort_unstable_by_key(|word| {
        (
            Reverse(LetterSet::of(word).len()),
            Reverse(word.len()),
            *word,
        )
    });

    let entries: Vec<SolutionEntry> = words
        .into_iter()
        .map(|word| SolutionEntry {
            word: word.to_string(),
            value: word_value(word),
        })
        .collect();
    let score = entries.iter().map(|entry| entry.value).sum();

    SolveReport {
        puzzle,
        entries,
        score,
    }
}
