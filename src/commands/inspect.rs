//! Word inspection command
//!
//! Explains whether a word can appear in any puzzle, and if not, why.

use crate::core::{LetterSet, MINIMUM_WORD_LENGTH, POT_SIZE};
use crate::solver::WordIndex;
use std::cmp::Ordering;

/// Something notable about an inspected word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    /// The word has characters other than the 26 lowercase Latin letters
    InvalidCharacters,
    /// The word is shorter than [`MINIMUM_WORD_LENGTH`]
    TooShort(usize),
    /// The number of distinct letters, compared to the pot size
    DistinctLetters { count: u32, relation: Ordering },
}

impl Finding {
    /// Whether this finding alone keeps the word out of every puzzle
    #[must_use]
    pub const fn disqualifies(self) -> bool {
        match self {
            Self::InvalidCharacters | Self::TooShort(_) => true,
            Self::DistinctLetters { relation, .. } => matches!(relation, Ordering::Greater),
        }
    }
}

/// Result of inspecting a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInspection {
    pub word: String,
    /// Present in the raw dictionary
    pub in_dictionary: bool,
    /// Accepted by the index, so it may solve some puzzle
    pub indexed: bool,
    pub findings: Vec<Finding>,
}

/// Inspect a word against the raw dictionary and the index built from it
///
/// Surrounding whitespace is ignored.
#[must_use]
pub fn inspect_word(word: &str, dictionary: &[String], index: &WordIndex) -> WordInspection {
    let word = word.trim();
    let in_dictionary = dictionary.iter().any(|entry| entry == word);

    let mut findings = Vec::new();
    match LetterSet::try_of(word) {
        None => findings.push(Finding::InvalidCharacters),
        Some(set) => {
            if word.len() < MINIMUM_WORD_LENGTH {
                findings.push(Finding::TooShort(word.len()));
            }
            findings.push(Finding::DistinctLetters {
                count: set.len(),
                relation: set.len().cmp(&POT_SIZE),
            });
        }
    }

    WordInspection {
        word: word.to_string(),
        in_dictionary,
        indexed: index.contains(word),
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_str;

    fn fixture() -> (Vec<String>, WordIndex) {
        let dictionary = words_from_str("lengthened\nthen\nCaps\nabcdefgh\ntenet\n");
        let index = WordIndex::new(&dictionary);
        (dictionary, index)
    }

    #[test]
    fn valid_bingo() {
        let (dictionary, index) = fixture();
        let inspection = inspect_word("  lengthened ", &dictionary, &index);
        assert_eq!(inspection.word, "lengthened");
        assert!(inspection.in_dictionary);
        assert!(inspection.indexed);
        assert_eq!(
            inspection.findings,
            [Finding::DistinctLetters {
                count: 7,
                relation: Ordering::Equal
            }]
        );
    }

    #[test]
    fn too_short() {
        let (dictionary, index) = fixture();
        let inspection = inspect_word("then", &dictionary, &index);
        assert!(inspection.in_dictionary);
        assert!(!inspection.indexed);
        assert_eq!(inspection.findings[0], Finding::TooShort(4));
        assert!(inspection.findings[0].disqualifies());
        assert!(!inspection.findings[1].disqualifies());
    }

    #[test]
    fn invalid_characters_stop_further_findings() {
        let (dictionary, index) = fixture();
        let inspection = inspect_word("Caps", &dictionary, &index);
        assert!(inspection.in_dictionary);
        assert!(!inspection.indexed);
        assert_eq!(inspection.findings, [Finding::InvalidCharacters]);
    }

    #[test]
    fn too_many_letters() {
        let (dictionary, index) = fixture();
        let inspection = inspect_word("abcdefgh", &dictionary, &index);
        assert!(!inspection.indexed);
        let finding = inspection.findings[0];
        assert_eq!(
            finding,
            Finding::DistinctLetters {
                count: 8,
                relation: Ordering::Greater
            }
        );
        assert!(finding.disqualifies());
    }

    #[test]
    fn unknown_word() {
        let (dictionary, index) = fixture();
        let inspection = inspect_word("teeth", &dictionary, &index);
        assert!(!inspection.in_dictionary);
        assert!(!inspection.indexed);
        assert_eq!(
            inspection.findings,
            [Finding::DistinctLetters {
                count: 3,
                relation: Ordering::Less
            }]
        );
    }
}
