//! Spelling Bee - CLI
//!
//! Solve puzzles, look up words and benchmark the solver against a dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use log::info;
use spelling_bee::{
    commands::{inspect_word, run_benchmark, solve_puzzle},
    core::Puzzle,
    output::{print_benchmark_result, print_inspection, print_solve_report},
    solver::WordIndex,
    wordlists::load_from_file,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling Bee puzzle solver and word inspector",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file with one word per line
    #[arg(short, long, global = true, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every word that solves a puzzle
    Solve {
        /// Letters every answer must use
        required: String,

        /// Other letters answers may use
        optional: String,

        /// Highlight the required letters in each answer
        #[arg(short, long)]
        verbose: bool,
    },

    /// Explain whether a word can appear in a puzzle
    Inspect {
        /// Word to look up
        word: String,
    },

    /// Solve every possible puzzle and report timing
    Benchmark {
        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.dictionary)?;

    match cli.command {
        Commands::Solve {
            required,
            optional,
            verbose,
        } => run_solve_command(&dictionary, &required, &optional, verbose),
        Commands::Inspect { word } => {
            run_inspect_command(&dictionary, &word);
            Ok(())
        }
        Commands::Benchmark { quiet } => {
            run_benchmark_command(&dictionary, quiet);
            Ok(())
        }
    }
}

fn load_dictionary(path: &Path) -> Result<Vec<String>> {
    let words = load_from_file(path)
        .with_context(|| format!("failed to read dictionary '{}'", path.display()))?;
    info!("read {} dictionary entries from {}", words.len(), path.display());
    Ok(words)
}

fn run_solve_command(
    dictionary: &[String],
    required: &str,
    optional: &str,
    verbose: bool,
) -> Result<()> {
    let puzzle = Puzzle::parse(required, optional).map_err(|e| anyhow::anyhow!(e))?;
    let index = WordIndex::new(dictionary);
    let report = solve_puzzle(&index, puzzle);
    print_solve_report(&report, verbose);
    Ok(())
}

fn run_inspect_command(dictionary: &[String], word: &str) {
    let index = WordIndex::new(dictionary);
    let inspection = inspect_word(word, dictionary, &index);
    print_inspection(&inspection);
}

fn run_benchmark_command(dictionary: &[String], quiet: bool) {
    println!("Compiling puzzle data from {} entries...", dictionary.len());
    let index = WordIndex::new(dictionary);
    println!(
        "Solving {} puzzles...",
        index.puzzles().len().to_string().bright_yellow()
    );
    let result = run_benchmark(&index, !quiet);
    print_benchmark_result(&result);
}
