use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use minicross_generator::{ConfigError, GeneratorConfig, PuzzleSeed};

/// Generates mini crosswords from a JSON definition dictionary.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// JSON dictionary: an array of `{"word", "original"?, "def"}` records.
    #[arg(short, long, value_name = "FILE")]
    pub(crate) dictionary: PathBuf,

    /// Seed of the puzzle to reproduce (64 hex digits).
    #[arg(long, value_name = "HEX", conflicts_with = "count")]
    pub(crate) seed: Option<PuzzleSeed>,

    /// Grid size to pick from. Repeatable. [default: 5 and 6]
    #[arg(long = "size", value_name = "N")]
    pub(crate) sizes: Vec<usize>,

    /// Topologies tried per puzzle before giving up. [default: 50]
    #[arg(long, value_name = "N")]
    pub(crate) max_attempts: Option<usize>,

    /// Candidate trials allowed per topology. [default: 20000]
    #[arg(long, value_name = "N")]
    pub(crate) step_budget: Option<usize>,

    /// Share of cells made black, in percent. [default: 15]
    #[arg(long, value_name = "PERCENT")]
    pub(crate) black_percent: Option<u32>,

    /// Number of puzzles to generate in parallel.
    #[arg(short = 'n', long, value_name = "N", default_value = "1")]
    pub(crate) count: NonZeroUsize,

    /// Print puzzles as a JSON array.
    #[arg(long)]
    pub(crate) json: bool,

    /// Print dictionary statistics instead of generating.
    #[arg(long)]
    pub(crate) stats: bool,
}

impl Args {
    /// Builds the generator configuration from the command line.
    pub(crate) fn config(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = GeneratorConfig::default();
        if !self.sizes.is_empty() {
            config = config.with_grid_sizes(self.sizes.iter().copied())?;
        }
        if let Some(percent) = self.black_percent {
            config = config.with_black_cell_percent(percent)?;
        }
        if let Some(attempts) = self.max_attempts {
            config = config.with_max_attempts(attempts);
        }
        if let Some(budget) = self.step_budget {
            config = config.with_step_budget(budget);
        }
        Ok(config)
    }
}
