//! Labeled puzzle data for calibrating rating thresholds

use crate::accessibility::AccessibilityEstimator;
use crate::core::Puzzle;
use crate::solver::WordIndex;
use log::debug;
use rayon::prelude::*;

/// A historical puzzle and its published rating thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThresholdRecord {
    pub puzzle: Puzzle,
    pub good: u32,
    pub excellent: u32,
    pub genius: u32,
}

/// A puzzle together with its solutions and rating thresholds
///
/// Thresholds are the minimum number of points for each rating and increase from
/// `good` to `genius`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDatum {
    pub puzzle: Puzzle,
    pub solutions: Vec<String>,
    pub good: u32,
    pub excellent: u32,
    pub genius: u32,
}

impl PuzzleDatum {
    #[must_use]
    pub fn new<I>(puzzle: Puzzle, solutions: I, good: u32, excellent: u32, genius: u32) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            puzzle,
            solutions: solutions.into_iter().map(Into::into).collect(),
            good,
            excellent,
            genius,
        }
    }

    /// Label a record with its solutions from the index, sorted alphabetically
    #[must_use]
    pub fn solve(record: &ThresholdRecord, index: &WordIndex) -> Self {
        let mut solutions: Vec<&str> = index.solutions_to(&record.puzzle).into_iter().collect();
        solutions.sort_unstable();
        Self::new(
            record.puzzle,
            solutions,
            record.good,
            record.excellent,
            record.genius,
        )
    }

    /// Accessibility of this puzzle under the given estimator
    #[must_use]
    pub fn accessibility<E: AccessibilityEstimator>(&self, estimator: &E) -> f64 {
        estimator.accessibility(&self.puzzle, &self.solutions)
    }
}

/// Solve every record, keeping the input order
#[must_use]
pub fn build_dataset(records: &[ThresholdRecord], index: &WordIndex) -> Vec<PuzzleDatum> {
    let data: Vec<PuzzleDatum> = records
        .par_iter()
        .map(|record| PuzzleDatum::solve(record, index))
        .collect();
    debug!("solved {} historical puzzles", data.len());
    data
}

/// A threshold-derived value to predict from accessibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// The "good" threshold
    Good,
    /// The "genius" threshold
    Genius,
    /// Half the distance from "good" to "genius", rounded down
    AverageLevelDelta,
}

impl Quantity {
    pub const ALL: [Self; 3] = [Self::Good, Self::Genius, Self::AverageLevelDelta];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "good_threshold",
            Self::Genius => "genius_threshold",
            Self::AverageLevelDelta => "average_level_delta",
        }
    }

    #[must_use]
    pub fn of(self, datum: &PuzzleDatum) -> f64 {
        match self {
            Self::Good => f64::from(datum.good),
            Self::Genius => f64::from(datum.genius),
            Self::AverageLevelDelta => f64::from(datum.genius.saturating_sub(datum.good) / 2),
        }
    }
}
