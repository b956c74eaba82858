//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod inspect;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{PuzzleWeek, SelectionConfig, generate_weeks};
pub use inspect::{Finding, WordInspection, inspect_word};
pub use solve::{SolutionEntry, SolveReport, solve_puzzle};
