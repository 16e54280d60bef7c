//! Backtracking fill search for mini crossword grids.
//!
//! This crate assigns a dictionary word to every slot of a grid such that
//! crossing slots agree on their shared letters and no word is used twice.
//!
//! # Overview
//!
//! - [`BacktrackingFiller`]: depth-first search over slots, longest first,
//!   bounded by a step budget
//! - [`Fill`] / [`Assignment`]: the words chosen for each slot
//! - [`FillStats`]: counters describing how much work a search did
//! - [`FillFailure`]: why an attempt gave up
//!
//! Randomness is injected through [`rand::Rng`], so a seeded generator makes
//! every search reproducible.
//!
//! # Examples
//!
//! ```
//! use minicross_core::{DictionaryEntry, Grid, WordIndex, extract_slots};
//! use minicross_filler::BacktrackingFiller;
//!
//! let index: WordIndex = ["se", "or", "so", "er"]
//!     .into_iter()
//!     .map(|word| DictionaryEntry::new(word, "Mot court."))
//!     .collect::<Result<_, _>>()?;
//!
//! let mut grid = Grid::new(2);
//! let slots = extract_slots(&grid);
//! let fill = BacktrackingFiller::default()
//!     .fill(&mut grid, &slots, &index, &mut rand::rng())
//!     .expect("a 2x2 word square exists");
//!
//! assert_eq!(fill.assignments().len(), 4);
//! assert!(grid.is_complete());
//! # Ok::<(), minicross_core::EntryError>(())
//! ```

pub use self::{backtracking_filler::*, error::*};

mod backtracking_filler;
mod error;

#[cfg(test)]
mod testing;
