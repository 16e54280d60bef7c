//! Core data structures for mini crossword generation.
//!
//! This crate provides the in-memory model shared by the filler and the
//! generator: the grid and its cells, the word slots derived from a grid, and
//! the dictionary entries that fill them.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Grid model**
//!    - [`position`]: `(row, col)` coordinates in row-major order
//!    - [`cell`]: a single cell, blocked, empty, or holding a letter
//!    - [`grid`]: the square grid with a compact text format
//!
//! 2. **Slots**
//!    - [`slot`]: across/down word slots and the slot extractor
//!    - [`pattern`]: the partially known letters of a slot
//!
//! 3. **Dictionary**
//!    - [`dictionary`]: normalized words with their definitions
//!    - [`word_index`]: entries grouped by word length for candidate lookup
//!
//! # Examples
//!
//! ```
//! use minicross_core::{Direction, Grid, extract_slots};
//!
//! let grid: Grid = "
//!     ..#
//!     ...
//!     #..
//! "
//! .parse()?;
//!
//! let slots = extract_slots(&grid);
//! assert_eq!(slots.iter().filter(|s| s.direction() == Direction::Across).count(), 3);
//! assert_eq!(slots.iter().filter(|s| s.direction() == Direction::Down).count(), 3);
//! # Ok::<(), minicross_core::GridParseError>(())
//! ```

pub mod cell;
pub mod dictionary;
pub mod grid;
pub mod pattern;
pub mod position;
pub mod slot;
pub mod word_index;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    dictionary::{DictionaryEntry, EntryError, MAX_WORD_LEN, MIN_WORD_LEN},
    grid::{Grid, GridParseError},
    pattern::Pattern,
    position::Position,
    slot::{Direction, Slot, extract_slots},
    word_index::WordIndex,
};
