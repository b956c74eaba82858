//! Submask enumeration
//!
//! Generates every subset of a letter set with the classic "next submask" step
//! `next = (current - 1) & mask`, starting from the full mask and ending at the
//! empty set. A set of `k` letters has exactly `2^k` submasks.

use crate::core::LetterSet;

/// Iterator over all subsets of a letter set, largest first
#[derive(Debug, Clone)]
pub struct Submasks {
    mask: u32,
    next: Option<u32>,
}

impl Submasks {
    #[must_use]
    pub const fn new(set: LetterSet) -> Self {
        Self {
            mask: set.bits(),
            next: Some(set.bits()),
        }
    }
}

impl Iterator for Submasks {
    type Item = LetterSet;

    fn next(&mut self) -> Option<LetterSet> {
        let current = self.next?;
        self.next = if current == 0 {
            None
        } else {
            Some((current - 1) & self.mask)
        };
        Some(LetterSet::from_bits(current))
    }
}

/// Enumerate every subset of `set`, including the empty set and `set` itself
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::solver::submasks;
///
/// let subsets: Vec<String> = submasks(LetterSet::of("ab")).map(|s| s.letters()).collect();
/// assert_eq!(subsets, ["ab", "b", "a", ""]);
/// ```
#[must_use]
pub const fn submasks(set: LetterSet) -> Submasks {
    Submasks::new(set)
}
