//! Mini crossword generation.
//!
//! This crate turns a [`WordIndex`](minicross_core::WordIndex) into finished
//! puzzles: a small square grid with scattered black cells, every slot filled
//! with a distinct dictionary word, and numbered clues.
//!
//! # Overview
//!
//! - [`PuzzleGenerator`]: retries random topologies until one fills
//! - [`GeneratorConfig`]: grid sizes, black cell density and search budgets
//! - [`PuzzleSeed`]: reproduces a puzzle exactly
//! - [`Puzzle`]: the solved grid, its clues and identifiers
//! - [`build_topology`] and [`number_clues`]: the steps around the fill
//!   search, usable on their own
//!
//! # Examples
//!
//! ```
//! use minicross_core::{DictionaryEntry, WordIndex};
//! use minicross_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
//!
//! let index: WordIndex = [
//!     ("chat", "Félin."),
//!     ("cat", "Félin anglais."),
//!     ("ore", "Minerai anglais."),
//!     ("wed", "Marié anglais."),
//!     ("cow", "Vache anglaise."),
//!     ("are", "Sont, en anglais."),
//!     ("ted", "Faner le foin."),
//! ]
//! .into_iter()
//! .map(|(word, def)| DictionaryEntry::new(word, def))
//! .collect::<Result<_, _>>()?;
//!
//! let config = GeneratorConfig::default()
//!     .with_grid_sizes([3])?
//!     .with_black_cell_percent(0)?
//!     .with_black_cell_jitter(0);
//! let generator = PuzzleGenerator::with_config(&index, config);
//!
//! let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
//!     .parse()?;
//! let puzzle = generator.generate_with_seed(seed)?;
//!
//! println!("{}", puzzle.grid);
//! for clue in &puzzle.definitions.across {
//!     println!("{clue}");
//! }
//! assert_eq!(puzzle.definitions.len(), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{config::*, generator::*, numbering::*, puzzle::*, seed::*, topology::build_topology};

mod config;
mod generator;
mod numbering;
mod puzzle;
mod seed;
mod topology;
