//! Letter-set vectors
//!
//! A letter set stores which of the 26 lowercase Latin letters are present as a
//! bit vector: bit `i` is set exactly if the `i`th letter of the alphabet is present.
//! For instance, `{'a', 'd', 'e', 'g'}` is `0b1011001`, which is also the letter set
//! of "adage" and of "gagged".

use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: u32 = 26;

/// A set of lowercase letters stored as a 26-bit vector
///
/// Bits 26 and above are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The set with no letters
    pub const EMPTY: Self = Self(0);

    /// The set of all 26 letters
    pub const ALPHABET: Self = Self((1 << ALPHABET_SIZE) - 1);

    /// Create a letter set from a raw bit vector
    ///
    /// # Panics
    /// Panics in debug mode if any bit above the alphabet is set
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        debug_assert!(bits >> ALPHABET_SIZE == 0, "letter set bits out of range");
        Self(bits)
    }

    /// Get the raw bit vector
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The singleton set for a lowercase ASCII letter
    ///
    /// Letters outside `a..=z` are a contract violation and are only caught in debug builds.
    #[inline]
    #[must_use]
    pub const fn letter(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_lowercase(), "letter outside a..=z");
        Self(1 << (byte.wrapping_sub(b'a') as u32 % 32))
    }

    /// Compute the letter set of a word, ignoring multiplicity and order
    ///
    /// The word must consist only of lowercase ASCII letters; use [`LetterSet::try_of`]
    /// for unvalidated input.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// assert_eq!(LetterSet::of("gagged"), LetterSet::of("adeg"));
    /// assert_eq!(LetterSet::of("adeg").bits(), 0b101_1001);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        word.bytes().fold(Self::EMPTY, |set, byte| set | Self::letter(byte))
    }

    /// Compute the letter set of a word, or `None` if it has a character outside `a..=z`
    #[must_use]
    pub fn try_of(word: &str) -> Option<Self> {
        word.bytes().try_fold(Self::EMPTY, |set, byte| {
            byte.is_ascii_lowercase().then(|| set | Self::letter(byte))
        })
    }

    /// The canonical spelling of this set: each letter once, in alphabetical order
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// assert_eq!(LetterSet::of("gagged").letters(), "adeg");
    /// assert_eq!(LetterSet::EMPTY.letters(), "");
    /// ```
    #[must_use]
    pub fn letters(self) -> String {
        self.singletons()
            .map(|single| char::from(b'a' + single.0.trailing_zeros() as u8))
            .collect()
    }

    /// Number of distinct letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The singleton set of the alphabetically first letter, if any
    #[inline]
    #[must_use]
    pub const fn lowest(self) -> Option<Self> {
        if self.0 == 0 {
            None
        } else {
            Some(Self(self.0 & self.0.wrapping_neg()))
        }
    }

    /// Iterate over the single-letter subsets, alphabetically
    pub fn singletons(self) -> impl Iterator<Item = Self> {
        let mut remaining = self;
        std::iter::from_fn(move || {
            let single = remaining.lowest()?;
            remaining = remaining - single;
            Some(single)
        })
    }
}

impl BitOr for LetterSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for LetterSet {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Set difference
impl Sub for LetterSet {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}
