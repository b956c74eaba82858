//! Threshold calibration
//!
//! Fits rating thresholds from historical puzzles against an accessibility metric,
//! compares estimators by cross-validation, and predicts thresholds for new puzzles.

mod datum;
mod evaluate;
mod regression;
mod thresholds;

pub use datum::{PuzzleDatum, Quantity, ThresholdRecord, build_dataset};
pub use evaluate::{
    EstimatorEvaluation, accessibility_table, evaluate_estimator, evaluate_estimators,
};
pub use regression::{Coefficients, LinearRegression, RegressionError};
pub use thresholds::{Ratings, ThresholdModel};
