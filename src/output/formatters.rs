//! Formatting utilities for terminal output

use crate::core::{BINGO_SCORE, LetterSet};

/// Uppercase every letter of `word` that belongs to `letters`
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::output::formatters::mark_letters;
///
/// assert_eq!(mark_letters("lengthened", LetterSet::of("e")), "lEngthEnEd");
/// ```
#[must_use]
pub fn mark_letters(word: &str, letters: LetterSet) -> String {
    word.chars()
        .map(|c| {
            let marked = c.is_ascii_lowercase() && letters.contains(LetterSet::letter(c as u8));
            if marked { c.to_ascii_uppercase() } else { c }
        })
        .collect()
}

/// Marker shown next to a word worth a bingo
#[must_use]
pub const fn value_marker(value: u32) -> &'static str {
    if value >= BINGO_SCORE { "★" } else { "" }
}

/// `count` followed by the singular or plural noun
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Letters of a set spaced out in capitals, e.g. `A B D R Y Z`
#[must_use]
pub fn spaced_letters(set: LetterSet) -> String {
    let letters = set.letters().to_ascii_uppercase();
    let mut result = String::with_capacity(letters.len() * 2);
    for (i, c) in letters.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}
