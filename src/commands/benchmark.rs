//! Benchmark command
//!
//! Solves every derivable puzzle to time the solver and count the puzzle space.

use crate::core::score;
use crate::solver::WordIndex;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub pot_count: usize,
    pub puzzle_count: usize,
    pub total_solutions: usize,
    pub total_score: u64,
    /// Most solutions any single puzzle has
    pub max_solutions: usize,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Solve every puzzle in the index in parallel
///
/// A progress bar is drawn on stderr when `show_progress` is set.
#[must_use]
pub fn run_benchmark(index: &WordIndex, show_progress: bool) -> BenchmarkResult {
    let puzzles = index.puzzles();

    let pb = if show_progress {
        let pb = ProgressBar::new(puzzles.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message("Solving puzzles");
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let per_puzzle: Vec<(usize, u32)> = puzzles
        .par_iter()
        .map(|puzzle| {
            let solutions = index.solutions_to(puzzle);
            pb.inc(1);
            (solutions.len(), score(&solutions))
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let total_solutions = per_puzzle.iter().map(|&(count, _)| count).sum();
    let total_score = per_puzzle.iter().map(|&(_, points)| u64::from(points)).sum();
    let max_solutions = per_puzzle.iter().map(|&(count, _)| count).max().unwrap_or(0);

    let puzzles_per_second = if duration.is_zero() {
        0.0
    } else {
        puzzles.len() as f64 / duration.as_secs_f64()
    };

    info!(
        "solved {} puzzles in {:.3}s",
        puzzles.len(),
        duration.as_secs_f64()
    );

    BenchmarkResult {
        pot_count: index.pots().len(),
        puzzle_count: puzzles.len(),
        total_solutions,
        total_score,
        max_solutions,
        duration,
        puzzles_per_second,
    }
}
