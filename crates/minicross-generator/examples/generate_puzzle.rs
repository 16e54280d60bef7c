//! Example demonstrating mini crossword generation.
//!
//! This example shows how to:
//! - Build a `WordIndex` from a word list
//! - Create a `PuzzleGenerator` with a custom `GeneratorConfig`
//! - Generate a puzzle, or pick the densest of many in parallel
//! - Display the grid, clues and seed
//!
//! The word list is a text file with one `WORD<TAB>definition` pair per line.
//! Lines that do not normalize to a valid entry are skipped. The `minicross`
//! binary reads the JSON dictionary format instead.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- words.tsv
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- words.tsv --seed <HEX>
//! ```
//!
//! Sample many puzzles and keep the one with the most clues:
//!
//! ```sh
//! cargo run --example generate_puzzle -- words.tsv --max-tries 200 --size 6
//! ```

use std::{fs, path::PathBuf, process};

use clap::Parser;
use minicross_core::{DictionaryEntry, WordIndex};
use minicross_generator::{
    GeneratorConfig, GeneratorError, Puzzle, PuzzleGenerator, PuzzleSeed,
};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Word list, one `WORD<TAB>definition` pair per line.
    words: PathBuf,

    /// Grid size to use. Repeatable.
    #[arg(long = "size", value_name = "N")]
    sizes: Vec<usize>,

    /// Seed to reproduce a puzzle.
    #[arg(long, value_name = "HEX", conflicts_with = "max_tries")]
    seed: Option<PuzzleSeed>,

    /// Puzzles to sample, keeping the one with the most clues.
    #[arg(long, value_name = "COUNT")]
    max_tries: Option<usize>,
}

fn main() {
    let args = Args::parse();

    let text = fs::read_to_string(&args.words).unwrap_or_else(|err| {
        eprintln!("Failed to read {}: {err}", args.words.display());
        process::exit(1);
    });
    let index = parse_word_list(&text);
    println!("Loaded {} words.", index.len());

    let mut config = GeneratorConfig::default();
    if !args.sizes.is_empty() {
        config = config.with_grid_sizes(args.sizes).unwrap_or_else(|err| {
            eprintln!("Invalid --size: {err}");
            process::exit(2);
        });
    }
    let generator = PuzzleGenerator::with_config(&index, config);

    let result = match (args.seed, args.max_tries) {
        (Some(seed), _) => generator.generate_with_seed(seed),
        (None, Some(max_tries)) => (0..max_tries)
            .into_par_iter()
            .filter_map(|_| generator.generate().ok())
            .max_by_key(|puzzle| puzzle.definitions.len())
            .ok_or_else(|| exhausted(max_tries, generator.config().max_attempts())),
        (None, None) => generator.generate(),
    };

    match result {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn parse_word_list(text: &str) -> WordIndex {
    text.lines()
        .filter_map(|line| line.split_once('\t'))
        .filter_map(|(word, definition)| DictionaryEntry::new(word, definition).ok())
        .collect()
}

fn exhausted(tries: usize, attempts_per_try: usize) -> GeneratorError {
    GeneratorError::GenerationExhausted {
        attempts: tries.saturating_mul(attempts_per_try),
    }
}

fn print_puzzle(puzzle: &Puzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Across:");
    for clue in &puzzle.definitions.across {
        println!("  {clue} = {}", clue.answer);
    }
    println!("Down:");
    for clue in &puzzle.definitions.down {
        println!("  {clue} = {}", clue.answer);
    }
}
