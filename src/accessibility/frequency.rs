//! Word frequency table

use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for invalid frequency tables
#[derive(Debug, Clone, PartialEq)]
pub enum FrequencyError {
    /// Entries whose frequency is negative or NaN, sorted by word
    InvalidFrequencies(Vec<(String, f64)>),
}

impl fmt::Display for FrequencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrequencies(entries) => {
                write!(f, "negative or non-numeric frequencies reported: ")?;
                for (i, (word, frequency)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{word}={frequency}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for FrequencyError {}

/// Validated mapping from word to natural-language frequency
///
/// Lookups never return zero: words that are missing, or recorded with frequency
/// exactly zero, report the smallest positive frequency in the table instead.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    frequencies: FxHashMap<String, f64>,
    minimum_nonzero_frequency: f64,
}

impl FrequencyModel {
    /// Build a model from `(word, frequency)` entries
    ///
    /// When a word appears more than once, the last entry wins. Every invalid entry is
    /// reported, even one that a later entry for the same word would replace.
    ///
    /// # Errors
    /// Returns `FrequencyError::InvalidFrequencies` listing every entry whose
    /// frequency is negative or NaN.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::accessibility::FrequencyModel;
    ///
    /// let model = FrequencyModel::new([("their", 1e-3), ("afforests", 0.0)]).unwrap();
    /// assert_eq!(model.word_frequency("their"), 1e-3);
    /// assert_eq!(model.word_frequency("afforests"), 1e-3);
    ///
    /// assert!(FrequencyModel::new([("oops", -1.0)]).is_err());
    /// ```
    pub fn new<I, S>(entries: I) -> Result<Self, FrequencyError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut frequencies: FxHashMap<String, f64> = FxHashMap::default();
        let mut invalid: Vec<(String, f64)> = Vec::new();
        for (word, frequency) in entries {
            let word = word.into();
            if frequency.is_nan() || frequency < 0.0 {
                invalid.push((word, frequency));
            } else {
                frequencies.insert(word, frequency);
            }
        }
        if !invalid.is_empty() {
            invalid.sort_by(|a, b| a.0.cmp(&b.0));
            return Err(FrequencyError::InvalidFrequencies(invalid));
        }

        // Arbitrary but nonzero when nothing positive was observed
        let minimum_nonzero_frequency = frequencies
            .values()
            .copied()
            .filter(|&frequency| frequency > 0.0)
            .min_by(f64::total_cmp)
            .unwrap_or(1.0);

        debug!(
            "loaded {} word frequencies (minimum nonzero {minimum_nonzero_frequency:e})",
            frequencies.len()
        );

        Ok(Self {
            frequencies,
            minimum_nonzero_frequency,
        })
    }

    /// Smallest strictly positive frequency in the table, or 1 if there is none
    #[inline]
    #[must_use]
    pub const fn minimum_nonzero_frequency(&self) -> f64 {
        self.minimum_nonzero_frequency
    }

    /// Estimated frequency of a word; always strictly positive
    ///
    /// A word recorded with frequency zero is treated the same as an unseen word.
    #[must_use]
    pub fn word_frequency(&self, word: &str) -> f64 {
        match self.frequencies.get(word) {
            Some(&frequency) if frequency > 0.0 => frequency,
            _ => self.minimum_nonzero_frequency,
        }
    }

    /// Number of words with a recorded frequency
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}
