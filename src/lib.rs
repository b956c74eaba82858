//! Spelling Bee
//!
//! Generates, solves and rates Spelling Bee puzzles: find every dictionary word a
//! puzzle admits, estimate how accessible the puzzle is, and calibrate rating
//! thresholds against historical puzzles.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::accessibility::{AccessibilityEstimator, Estimator};
//! use spelling_bee::core::{Puzzle, score};
//! use spelling_bee::solver::WordIndex;
//!
//! let index = WordIndex::new(["lengthened", "lengthen", "tenet", "teeth", "then"]);
//! let puzzle = Puzzle::parse("e", "dghntl").unwrap();
//!
//! let solutions: Vec<&str> = index.solutions_to(&puzzle).into_iter().collect();
//! assert_eq!(solutions.len(), 4);
//! assert_eq!(score(&solutions), 6);
//!
//! let accessibility = Estimator::count().accessibility(&puzzle, &solutions);
//! assert!((accessibility - 4.0).abs() < f64::EPSILON);
//! ```

// Letter sets, puzzles and scoring
pub mod core;

// Word index and subset enumeration
pub mod solver;

// Accessibility estimators and word frequencies
pub mod accessibility;

// Regression and threshold calibration
pub mod calibration;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
