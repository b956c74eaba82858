//! Rating threshold prediction
//!
//! Two regressions share one accessibility estimator: one predicts the "good"
//! threshold, the other the gap between consecutive ratings.

use super::{LinearRegression, PuzzleDatum, RegressionError};
use crate::accessibility::{AccessibilityEstimator, Estimator};
use crate::core::Puzzle;
use log::info;

/// Predicted rating thresholds for a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratings {
    pub good: u32,
    pub excellent: u32,
    pub genius: u32,
}

/// Predicts rating thresholds from a puzzle's accessibility
pub struct ThresholdModel<'a> {
    estimator: Estimator<'a>,
    good: LinearRegression<'a, PuzzleDatum>,
    level_delta: LinearRegression<'a, PuzzleDatum>,
}

impl<'a> ThresholdModel<'a> {
    /// Train both regressions on historical data
    ///
    /// # Errors
    /// Returns `RegressionError::EmptyDataset` if `data` is empty.
    pub fn train(estimator: Estimator<'a>, data: &[PuzzleDatum]) -> Result<Self, RegressionError> {
        let good = LinearRegression::fit(
            move |datum: &PuzzleDatum| datum.accessibility(&estimator),
            |datum: &PuzzleDatum| f64::from(datum.good),
            data,
        )?;
        let level_delta = LinearRegression::fit(
            move |datum: &PuzzleDatum| datum.accessibility(&estimator),
            |datum: &PuzzleDatum| 0.5 * (f64::from(datum.genius) - f64::from(datum.good)),
            data,
        )?;

        info!(
            "trained {} threshold model: good = {:.4}x + {:.4}, delta = {:.4}x + {:.4}",
            estimator.name(),
            good.beta1(),
            good.beta0(),
            level_delta.beta1(),
            level_delta.beta0()
        );

        Ok(Self {
            estimator,
            good,
            level_delta,
        })
    }

    #[must_use]
    pub const fn estimator(&self) -> Estimator<'a> {
        self.estimator
    }

    /// Thresholds for a puzzle with the given accessibility
    ///
    /// Each prediction is rounded to the nearest integer and clamped to the range of
    /// `u32`; the derived thresholds saturate at `u32::MAX`.
    #[must_use]
    pub fn predict(&self, accessibility: f64) -> Ratings {
        let good = to_points(self.good.predict(accessibility));
        let delta = to_points(self.level_delta.predict(accessibility));
        Ratings {
            good,
            excellent: good.saturating_add(delta),
            genius: good.saturating_add(delta.saturating_mul(2)),
        }
    }

    /// Thresholds for a puzzle with the given solutions
    #[must_use]
    pub fn predict_puzzle<S: AsRef<str>>(&self, puzzle: &Puzzle, solutions: &[S]) -> Ratings {
        self.predict(self.estimator.accessibility(puzzle, solutions))
    }
}

fn to_points(prediction: f64) -> u32 {
    prediction.round().max(0.0) as u32
}
