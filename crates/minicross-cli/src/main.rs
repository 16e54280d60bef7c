//! `minicross` command-line generator.
//!
//! Loads a JSON definition dictionary and prints generated puzzles as text or
//! JSON. Set `RUST_LOG=debug` to see every failed topology attempt.

use std::{error::Error as _, io, process::ExitCode};

use clap::Parser as _;
use minicross_generator::{PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

use crate::{
    args::Args,
    dictionary_dto::load_dictionary,
    error::CliError,
    output::{StatsText, write_puzzles},
};

mod args;
mod dictionary_dto;
mod error;
mod output;
mod puzzle_dto;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let index = load_dictionary(&args.dictionary)?;
    if args.stats {
        print!("{}", StatsText(&index));
        return Ok(());
    }

    let generator = PuzzleGenerator::with_config(&index, args.config()?);
    let seeds = match args.seed {
        Some(seed) => vec![seed],
        None => (0..args.count.get()).map(|_| PuzzleSeed::random()).collect(),
    };
    let puzzles = seeds
        .into_par_iter()
        .map(|seed| generator.generate_with_seed(seed))
        .collect::<Result<Vec<_>, _>>()?;

    write_puzzles(&mut io::stdout().lock(), &puzzles, args.json)
}
