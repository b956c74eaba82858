//! Puzzle selection command
//!
//! Picks weekly sets of three puzzles (easy, medium, hard) from everything the
//! dictionary can produce, and labels each with predicted rating thresholds.

use crate::accessibility::AccessibilityEstimator;
use crate::calibration::{PuzzleDatum, ThresholdModel};
use crate::core::{LetterSet, Puzzle, score};
use crate::solver::WordIndex;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Settings for puzzle selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Lowest total score a puzzle may have, inclusive
    pub min_score: u32,
    /// Highest total score a puzzle may have, inclusive
    pub max_score: u32,
    /// Seed for the random choices, so runs are reproducible
    pub seed: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_score: 14,
            max_score: 28,
            seed: 0,
        }
    }
}

/// One week of puzzles, in order of increasing difficulty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleWeek {
    pub easy: PuzzleDatum,
    pub medium: PuzzleDatum,
    pub hard: PuzzleDatum,
}

struct Candidate {
    puzzle: Puzzle,
    solutions: Vec<String>,
    accessibility: f64,
}

impl Candidate {
    fn label(&self, model: &ThresholdModel<'_>) -> PuzzleDatum {
        let ratings = model.predict(self.accessibility);
        PuzzleDatum::new(
            self.puzzle,
            self.solutions.iter().cloned(),
            ratings.good,
            ratings.excellent,
            ratings.genius,
        )
    }
}

/// Select up to `weeks` weeks of puzzles
///
/// Only puzzles whose score is within the configured range are considered, and at
/// most one puzzle is taken per pot. The pool is ranked by the model's
/// accessibility estimate and cut into thirds; week `i` takes the `i`th puzzle of
/// each third, after the thirds are shuffled. Fewer weeks are returned when the pool
/// is too small.
#[must_use]
pub fn generate_weeks(
    index: &WordIndex,
    model: &ThresholdModel<'_>,
    weeks: usize,
    config: &SelectionConfig,
) -> Vec<PuzzleWeek> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let estimator = model.estimator();

    let in_range: Vec<(Puzzle, Vec<String>)> = index
        .puzzles()
        .par_iter()
        .filter_map(|puzzle| {
            let mut solutions: Vec<String> = index
                .solutions_to(puzzle)
                .into_iter()
                .map(str::to_string)
                .collect();
            let points = score(&solutions);
            if points < config.min_score || points > config.max_score {
                return None;
            }
            solutions.sort_unstable();
            Some((*puzzle, solutions))
        })
        .collect();
    info!(
        "{} puzzles with scores between {} and {}",
        in_range.len(),
        config.min_score,
        config.max_score
    );

    let mut by_pot: BTreeMap<LetterSet, Vec<(Puzzle, Vec<String>)>> = BTreeMap::new();
    for (puzzle, solutions) in in_range {
        by_pot.entry(puzzle.pot()).or_default().push((puzzle, solutions));
    }

    let mut pool: Vec<Candidate> = by_pot
        .values()
        .filter_map(|group| group.choose(&mut rng))
        .map(|(puzzle, solutions)| Candidate {
            puzzle: *puzzle,
            accessibility: estimator.accessibility(puzzle, solutions),
            solutions: solutions.clone(),
        })
        .collect();
    info!("{} puzzles in pool, one per pot", pool.len());

    pool.sort_by(|a, b| b.accessibility.total_cmp(&a.accessibility));

    let step = pool.len() / 3;
    pool[..step].shuffle(&mut rng);
    pool[step..2 * step].shuffle(&mut rng);
    pool[2 * step..].shuffle(&mut rng);

    (0..weeks.min(step))
        .map(|i| PuzzleWeek {
            easy: pool[i].label(model),
            medium: pool[i + step].label(model),
            hard: pool[i + 2 * step].label(model),
        })
        .collect()
}
