//! Puzzle accessibility estimation
//!
//! Reduces a puzzle and its solutions to a single number describing how easy the
//! puzzle is to make progress on. Two of the estimators only look at the solutions;
//! the other two weigh each solution by its natural-language frequency.

mod estimator;
mod frequency;

pub use estimator::{
    AccessibilityEstimator, AdditiveFrequencyEstimator, Estimator, InverseLogFrequencyEstimator,
    RarityParams, ScoreEstimator, SolutionCountEstimator,
};
pub use frequency::{FrequencyError, FrequencyModel};
