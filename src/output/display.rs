//! Display functions for command results

use super::formatters::{mark_letters, pluralize, spaced_letters, value_marker};
use crate::commands::{BenchmarkResult, Finding, SolveReport, WordInspection};
use crate::core::{MINIMUM_WORD_LENGTH, POT_SIZE};
use colored::Colorize;
use std::cmp::Ordering;

/// Print the answers to a puzzle
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    let puzzle = report.puzzle;
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {}  {}",
        spaced_letters(puzzle.required()).bright_yellow().bold(),
        spaced_letters(puzzle.optional())
    );
    println!("{}", "─".repeat(60).cyan());

    if report.entries.is_empty() {
        println!("\n{}", "No words solve this puzzle.".red());
        return;
    }

    println!();
    for entry in &report.entries {
        let word = if verbose {
            mark_letters(&entry.word, puzzle.required())
        } else {
            entry.word.clone()
        };
        let marker = value_marker(entry.value);
        if marker.is_empty() {
            println!("  {word}");
        } else {
            println!("  {} {}", word.green().bold(), marker.bright_yellow());
        }
    }

    println!(
        "\n{} {}, {} {}",
        pluralize(report.entries.len(), "word", "words").bold(),
        format!("({})", pluralize(report.bingo_count(), "bingo", "bingos")).green(),
        "total score".bold(),
        report.score.to_string().bright_yellow().bold()
    );
}

/// Print the result of inspecting a word
pub fn print_inspection(inspection: &WordInspection) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD LOOKUP:".bright_cyan().bold(),
        inspection.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if inspection.in_dictionary {
        println!("  Appears in the dictionary.");
    } else {
        println!("  {}", "Does not appear in the dictionary.".red());
    }
    if inspection.indexed {
        println!("  {}", "Potentially valid in a puzzle.".green());
    } else {
        println!("  {}", "Not valid as a puzzle solution.".red());
    }

    for finding in &inspection.findings {
        let line = match *finding {
            Finding::InvalidCharacters => {
                "Has characters outside the 26 lowercase Latin letters.".to_string()
            }
            Finding::TooShort(length) => format!(
                "Has only {}; at least {MINIMUM_WORD_LENGTH} are needed.",
                pluralize(length, "letter", "letters")
            ),
            Finding::DistinctLetters { count, relation } => {
                let letters = pluralize(count as usize, "distinct letter", "distinct letters");
                match relation {
                    Ordering::Less => format!("Has {letters}."),
                    Ordering::Equal => format!(
                        "Has {letters}, using every letter of any puzzle it solves."
                    ),
                    Ordering::Greater => format!(
                        "Has {letters}, more than the {POT_SIZE} in a pot, so it never appears."
                    ),
                }
            }
        };
        if finding.disqualifies() {
            println!("  • {}", line.yellow());
        } else {
            println!("  • {line}");
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Puzzle space:".bright_cyan().bold());
    println!("   Pots:             {}", result.pot_count);
    println!(
        "   Puzzles:          {}",
        result.puzzle_count.to_string().bright_yellow().bold()
    );
    println!("   Total solutions:  {}", result.total_solutions);
    println!("   Total score:      {}", result.total_score);
    println!("   Most solutions:   {}", result.max_solutions);

    println!("\n⏱  {}", "Performance:".bright_cyan().bold());
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Puzzles/second:   {}",
        format!("{:.1}", result.puzzles_per_second).green()
    );
}
