//! Dictionary index and puzzle solving

use super::submask::submasks;
use crate::core::{LetterSet, MINIMUM_WORD_LENGTH, POT_SIZE, Puzzle};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Word index built once from a dictionary
///
/// Groups the acceptable words by letter set so that a puzzle can be solved by
/// looking up at most `2^6` buckets instead of scanning the dictionary. Read-only
/// after construction, so queries can run from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    /// Every word that might appear in a puzzle: lowercase letters only, at least
    /// [`MINIMUM_WORD_LENGTH`] long, with at most [`POT_SIZE`] distinct letters.
    words: FxHashSet<String>,

    /// `words` partitioned by letter set. Two words share a bucket exactly if they use
    /// the same letters, ignoring multiplicity.
    words_by_set: FxHashMap<LetterSet, FxHashSet<String>>,

    /// Letter sets of exactly [`POT_SIZE`] letters that some word spells
    pots: FxHashSet<LetterSet>,

    /// One puzzle per pot per choice of single required letter
    puzzles: Vec<Puzzle>,
}

impl WordIndex {
    /// Build an index from a raw dictionary
    ///
    /// Entries may be arbitrary strings; anything too short, containing characters
    /// outside `a..=z`, or using more than [`POT_SIZE`] distinct letters is skipped.
    /// Work is linear in the dictionary size.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::solver::WordIndex;
    ///
    /// let index = WordIndex::new(["lengthened", "lengthen", "then", "Caps"]);
    /// assert_eq!(index.words().len(), 2);
    /// assert_eq!(index.pots().len(), 1);
    /// assert_eq!(index.puzzles().len(), 7);
    /// ```
    pub fn new<I>(dictionary: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut index = Self::default();
        let mut skipped = 0_usize;

        for entry in dictionary {
            let word = entry.as_ref();
            if !index.insert(word) {
                skipped += 1;
            }
        }

        debug!(
            "indexed {} words into {} letter sets ({} skipped); {} pots, {} puzzles",
            index.words.len(),
            index.words_by_set.len(),
            skipped,
            index.pots.len(),
            index.puzzles.len()
        );

        index
    }

    /// Add one dictionary entry, returning whether it was acceptable
    fn insert(&mut self, word: &str) -> bool {
        if word.len() < MINIMUM_WORD_LENGTH {
            return false;
        }
        let Some(set) = LetterSet::try_of(word) else {
            return false;
        };
        if set.len() > POT_SIZE {
            return false;
        }

        self.words.insert(word.to_string());
        self.words_by_set
            .entry(set)
            .or_default()
            .insert(word.to_string());

        if set.len() == POT_SIZE && self.pots.insert(set) {
            self.puzzles.extend(puzzles_for_pot(set));
        }
        true
    }

    /// All acceptable words
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &FxHashSet<String> {
        &self.words
    }

    /// Check whether a word is acceptable in some puzzle
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Words whose letter set is exactly `set`
    #[must_use]
    pub fn bucket(&self, set: LetterSet) -> Option<&FxHashSet<String>> {
        self.words_by_set.get(&set)
    }

    /// Iterate over every non-empty bucket
    pub fn buckets(&self) -> impl Iterator<Item = (LetterSet, &FxHashSet<String>)> {
        self.words_by_set.iter().map(|(&set, words)| (set, words))
    }

    /// All realizable pots
    #[inline]
    #[must_use]
    pub const fn pots(&self) -> &FxHashSet<LetterSet> {
        &self.pots
    }

    /// Every puzzle derivable from the realizable pots
    #[inline]
    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Find every indexed word that solves the puzzle
    ///
    /// A word solves the puzzle when it uses all required letters and nothing outside
    /// the pot. Only the buckets `required | m` for each subset `m` of the optional
    /// letters are touched, so the cost is independent of the dictionary size. An
    /// empty result is ordinary, not an error.
    ///
    /// The walk covers `2^k` subsets for `k` optional letters: 64 for a regular
    /// puzzle, but over 33 million for a pot spanning the whole alphabet.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Puzzle;
    /// use spelling_bee::solver::WordIndex;
    ///
    /// let index = WordIndex::new(["abracadabrazy", "abrac", "barca", "barbar"]);
    /// let puzzle = Puzzle::parse("c", "abdryz").unwrap();
    ///
    /// let mut words: Vec<&str> = index.solutions_to(&puzzle).into_iter().collect();
    /// words.sort_unstable();
    /// assert_eq!(words, ["abrac", "abracadabrazy", "barca"]);
    /// ```
    #[must_use]
    pub fn solutions_to(&self, puzzle: &Puzzle) -> FxHashSet<&str> {
        let required = puzzle.required();
        submasks(puzzle.optional())
            .filter_map(|extra| self.words_by_set.get(&(required | extra)))
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// All puzzles with the given pot and exactly one required letter
pub fn puzzles_for_pot(pot: LetterSet) -> impl Iterator<Item = Puzzle> {
    pot.singletons().map(move |required| Puzzle::new(pot, required))
}
