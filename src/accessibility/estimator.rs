//! Accessibility estimators
//!
//! Defines the `AccessibilityEstimator` trait and its fixed set of implementations.

use super::FrequencyModel;
use crate::core::{Puzzle, score};

/// An estimate of how easy it is to find solutions to a puzzle
///
/// A puzzle for which it is easy to find many words is highly accessible. An accessible
/// puzzle may still feel difficult if its rating thresholds are steep, and vice versa.
pub trait AccessibilityEstimator {
    /// Estimate the accessibility of a puzzle given its full solution set
    fn accessibility<S: AsRef<str>>(&self, puzzle: &Puzzle, solutions: &[S]) -> f64;
}

/// Tuning for [`InverseLogFrequencyEstimator`]
///
/// These values depend on the frequency corpus and have to be re-derived for each one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityParams {
    /// Rarity around which words start to count for less. Words much more common than
    /// this are all treated as equally well known.
    pub cotail: f64,

    /// How much rectified rarity matters. Zero makes every word count as one; large
    /// values make even moderately rare words nearly worthless.
    pub falloff: f64,
}

impl RarityParams {
    /// Values chosen by inspecting frequencies for the Ubuntu `wamerican` 7.1-1 word list
    pub const WAMERICAN: Self = Self::new(6.0, 0.08);

    #[must_use]
    pub const fn new(cotail: f64, falloff: f64) -> Self {
        Self { cotail, falloff }
    }
}

/// Enum wrapper for all estimator types
///
/// The set of estimators is closed; dispatch is static.
#[derive(Debug, Clone, Copy)]
pub enum Estimator<'a> {
    /// Number of solutions
    Count(SolutionCountEstimator),
    /// Total score of the solutions
    Score(ScoreEstimator),
    /// Sum of solution frequencies
    AdditiveFrequency(AdditiveFrequencyEstimator<'a>),
    /// Sum of per-word weights that discount rare words
    InverseLogFrequency(InverseLogFrequencyEstimator<'a>),
}

impl AccessibilityEstimator for Estimator<'_> {
    fn accessibility<S: AsRef<str>>(&self, puzzle: &Puzzle, solutions: &[S]) -> f64 {
        match self {
            Self::Count(e) => e.accessibility(puzzle, solutions),
            Self::Score(e) => e.accessibility(puzzle, solutions),
            Self::AdditiveFrequency(e) => e.accessibility(puzzle, solutions),
            Self::InverseLogFrequency(e) => e.accessibility(puzzle, solutions),
        }
    }
}

impl<'a> Estimator<'a> {
    #[must_use]
    pub const fn count() -> Self {
        Self::Count(SolutionCountEstimator)
    }

    #[must_use]
    pub const fn score() -> Self {
        Self::Score(ScoreEstimator)
    }

    #[must_use]
    pub const fn additive_frequency(frequencies: &'a FrequencyModel) -> Self {
        Self::AdditiveFrequency(AdditiveFrequencyEstimator::new(frequencies))
    }

    #[must_use]
    pub const fn inverse_log_frequency(
        frequencies: &'a FrequencyModel,
        params: RarityParams,
    ) -> Self {
        Self::InverseLogFrequency(InverseLogFrequencyEstimator::new(frequencies, params))
    }

    /// Every estimator, in a fixed order
    #[must_use]
    pub const fn all(frequencies: &'a FrequencyModel, params: RarityParams) -> [Self; 4] {
        [
            Self::count(),
            Self::score(),
            Self::additive_frequency(frequencies),
            Self::inverse_log_frequency(frequencies, params),
        ]
    }

    /// Short identifier used in reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Count(_) => "solution_count",
            Self::Score(_) => "score",
            Self::AdditiveFrequency(_) => "additive_freq",
            Self::InverseLogFrequency(_) => "inverse_log_freq",
        }
    }
}

/// Uses the number of solutions as the metric
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionCountEstimator;

impl AccessibilityEstimator for SolutionCountEstimator {
    fn accessibility<S: AsRef<str>>(&self, _puzzle: &Puzzle, solutions: &[S]) -> f64 {
        solutions.len() as f64
    }
}

/// Uses the total score of the solutions as the metric
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEstimator;

impl AccessibilityEstimator for ScoreEstimator {
    fn accessibility<S: AsRef<str>>(&self, _puzzle: &Puzzle, solutions: &[S]) -> f64 {
        f64::from(score(solutions))
    }
}

/// Sums the frequencies of the solutions
///
/// If a word's frequency were the probability that a player knows it, this would be
/// the expected number of known words. That assumption does not really hold.
#[derive(Debug, Clone, Copy)]
pub struct AdditiveFrequencyEstimator<'a> {
    frequencies: &'a FrequencyModel,
}

impl<'a> AdditiveFrequencyEstimator<'a> {
    #[must_use]
    pub const fn new(frequencies: &'a FrequencyModel) -> Self {
        Self { frequencies }
    }
}

impl AccessibilityEstimator for AdditiveFrequencyEstimator<'_> {
    fn accessibility<S: AsRef<str>>(&self, _puzzle: &Puzzle, solutions: &[S]) -> f64 {
        solutions
            .iter()
            .map(|word| self.frequencies.word_frequency(word.as_ref()))
            .sum()
    }
}

/// Sums a per-word weight that is close to 1 for common words and decays for rare ones
///
/// For a word with frequency `f`, rarity is `-ln f`. The weight is
/// `1 / (1 + falloff * softplus(rarity - cotail))`.
#[derive(Debug, Clone, Copy)]
pub struct InverseLogFrequencyEstimator<'a> {
    frequencies: &'a FrequencyModel,
    params: RarityParams,
}

impl<'a> InverseLogFrequencyEstimator<'a> {
    #[must_use]
    pub const fn new(frequencies: &'a FrequencyModel, params: RarityParams) -> Self {
        Self {
            frequencies,
            params,
        }
    }

    #[must_use]
    pub const fn params(&self) -> RarityParams {
        self.params
    }

    /// Contribution of a single word to the accessibility sum
    #[must_use]
    pub fn word_weight(&self, word: &str) -> f64 {
        let rarity = -self.frequencies.word_frequency(word).ln();
        let rectified = softplus(rarity - self.params.cotail);
        1.0 / (1.0 + self.params.falloff * rectified)
    }
}

impl AccessibilityEstimator for InverseLogFrequencyEstimator<'_> {
    fn accessibility<S: AsRef<str>>(&self, _puzzle: &Puzzle, solutions: &[S]) -> f64 {
        solutions
            .iter()
            .map(|word| self.word_weight(word.as_ref()))
            .sum()
    }
}

/// `ln(1 + e^x)`, without overflow for large `x`
fn softplus(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;

    fn puzzle() -> Puzzle {
        Puzzle::new(LetterSet::of("lengthd"), LetterSet::of("e"))
    }

    fn frequencies() -> FrequencyModel {
        FrequencyModel::new([
            ("lengthen", 1e-5),
            ("lengthened", 1e-7),
            ("length", 1e-3),
            ("tenet", 0.0),
        ])
        .unwrap()
    }

    const SOLUTIONS: [&str; 4] = ["lengthen", "lengthened", "length", "tenet"];

    #[test]
    fn count_is_number_of_solutions() {
        let e = Estimator::count();
        assert!((e.accessibility(&puzzle(), &SOLUTIONS) - 4.0).abs() < f64::EPSILON);
        assert!(e.accessibility::<&str>(&puzzle(), &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn score_counts_bingos() {
        let e = Estimator::score();
        // one bingo (3) plus three regular words
        assert!((e.accessibility(&puzzle(), &SOLUTIONS) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn additive_sums_frequencies_with_fallback() {
        let model = frequencies();
        let e = Estimator::additive_frequency(&model);
        let expected = 1e-5 + 1e-7 + 1e-3 + 1e-7;
        assert!((e.accessibility(&puzzle(), &SOLUTIONS) - expected).abs() < 1e-15);
    }

    #[test]
    fn additive_is_monotone_in_solutions() {
        let model = frequencies();
        let e = Estimator::additive_frequency(&model);
        let fewer = e.accessibility(&puzzle(), &SOLUTIONS[..2]);
        let more = e.accessibility(&puzzle(), &SOLUTIONS[..3]);
        let unknown = e.accessibility(&puzzle(), &["lengthen", "lengthened", "unheard"]);
        assert!(more >= fewer);
        assert!(unknown >= fewer);
    }

    #[test]
    fn inverse_log_zero_falloff_matches_count() {
        let model = frequencies();
        let e = Estimator::inverse_log_frequency(&model, RarityParams::new(6.0, 0.0));
        assert!((e.accessibility(&puzzle(), &SOLUTIONS) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_log_common_words_count_fully() {
        let model = FrequencyModel::new([("their", 0.5)]).unwrap();
        let e = InverseLogFrequencyEstimator::new(&model, RarityParams::new(50.0, 0.08));
        // rarity ~0.69, far below the cotail
        assert!((e.word_weight("their") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_log_rare_words_count_less() {
        let model = frequencies();
        let e = InverseLogFrequencyEstimator::new(&model, RarityParams::WAMERICAN);
        let common = e.word_weight("length");
        let rare = e.word_weight("lengthened");
        assert!(rare < common);
        assert!(rare > 0.0 && common <= 1.0);

        // rarity of 1e-7 is ~16.1, so the weight is about 1 / (1 + 0.08 * 10.1)
        let expected = 1.0 / (1.0 + 0.08 * softplus(-(1e-7_f64).ln() - 6.0));
        assert!((rare - expected).abs() < 1e-12);
    }

    #[test]
    fn inverse_log_steeper_falloff_discounts_more() {
        let model = frequencies();
        let gentle = Estimator::inverse_log_frequency(&model, RarityParams::new(6.0, 0.08));
        let steep = Estimator::inverse_log_frequency(&model, RarityParams::new(6.0, 0.8));
        assert!(
            steep.accessibility(&puzzle(), &SOLUTIONS) < gentle.accessibility(&puzzle(), &SOLUTIONS)
        );
    }

    #[test]
    fn softplus_is_stable() {
        assert!((softplus(0.0) - std::f64::consts::LN_2).abs() < 1e-12);
        assert!(softplus(-1000.0) >= 0.0 && softplus(-1000.0) < 1e-300);
        assert!((softplus(1000.0) - 1000.0).abs() < 1e-9);
        assert!(softplus(1000.0).is_finite());
    }

    #[test]
    fn names_are_distinct() {
        let model = frequencies();
        let names: Vec<&str> = Estimator::all(&model, RarityParams::WAMERICAN)
            .iter()
            .map(Estimator::name)
            .collect();
        assert_eq!(
            names,
            ["solution_count", "score", "additive_freq", "inverse_log_freq"]
        );
    }
}
