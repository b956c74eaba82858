//! Estimator evaluation
//!
//! Compares how well each accessibility estimator predicts a threshold quantity.
//! Every estimator is fit on the full data and on each half of it; the halves are
//! then scored against each other.

use super::{LinearRegression, PuzzleDatum, Quantity, RegressionError};
use crate::accessibility::{AccessibilityEstimator, Estimator};
use log::debug;

/// How well one estimator predicts one quantity
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorEvaluation {
    pub estimator: &'static str,
    pub quantity: &'static str,
    /// Rounded error of the full-data model on the full data
    pub train_msre: f64,
    /// Mean rounded error of each half-data model on the other half
    pub cross_msre: f64,
    /// Mean unrounded error of each half-data model on the other half
    pub cross_mse: f64,
    /// Mean accessibility over the data
    pub mean_accessibility: f64,
}

/// Evaluate a single estimator against a quantity
///
/// # Errors
/// Returns `RegressionError::EmptyDataset` if `data` has fewer than two entries, since
/// each half needs at least one.
pub fn evaluate_estimator(
    data: &[PuzzleDatum],
    estimator: Estimator<'_>,
    quantity: Quantity,
) -> Result<EstimatorEvaluation, RegressionError> {
    if data.len() < 2 {
        return Err(RegressionError::EmptyDataset);
    }
    let (first, second) = data.split_at(data.len() / 2);

    let model = |training: &[PuzzleDatum]| {
        LinearRegression::fit(
            move |datum: &PuzzleDatum| datum.accessibility(&estimator),
            move |datum: &PuzzleDatum| quantity.of(datum),
            training,
        )
    };
    let full = model(data)?;
    let h1 = model(first)?;
    let h2 = model(second)?;

    let mean_accessibility =
        data.iter().map(|datum| full.x(datum)).sum::<f64>() / data.len() as f64;

    let evaluation = EstimatorEvaluation {
        estimator: estimator.name(),
        quantity: quantity.name(),
        train_msre: full.msre(data),
        cross_msre: 0.5 * (h1.msre(second) + h2.msre(first)),
        cross_mse: 0.5 * (h1.mse(second) + h2.mse(first)),
        mean_accessibility,
    };
    debug!("{evaluation:?}");
    Ok(evaluation)
}

/// Evaluate every estimator against a quantity, in the given order
///
/// # Errors
/// Returns `RegressionError::EmptyDataset` if `data` has fewer than two entries.
pub fn evaluate_estimators(
    data: &[PuzzleDatum],
    estimators: &[Estimator<'_>],
    quantity: Quantity,
) -> Result<Vec<EstimatorEvaluation>, RegressionError> {
    estimators
        .iter()
        .map(|&estimator| evaluate_estimator(data, estimator, quantity))
        .collect()
}

/// Accessibility of every datum under every estimator, row by row
#[must_use]
pub fn accessibility_table(data: &[PuzzleDatum], estimators: &[Estimator<'_>]) -> Vec<Vec<f64>> {
    data.iter()
        .map(|datum| {
            estimators
                .iter()
                .map(|estimator| estimator.accessibility(&datum.puzzle, &datum.solutions))
                .collect()
        })
        .collect()
}
