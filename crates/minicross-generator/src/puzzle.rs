use std::fmt;

use minicross_core::{Cell, Grid};
use sha2::{Digest as _, Sha256};

use crate::{Definitions, PuzzleSeed};

/// A content-derived identifier of a generated puzzle.
///
/// The id is the SHA-256 digest of the seed bytes followed by the solved
/// grid's text form, so two puzzles share an id only if they are identical.
/// It is displayed as 64 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleId([u8; 32]);

impl PuzzleId {
    /// Computes the id of the puzzle generated from `seed` with solution `grid`.
    #[must_use]
    pub fn new(seed: &PuzzleSeed, grid: &Grid) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        hasher.update(grid.to_string().as_bytes());
        Self(hasher.finalize().into())
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A generated mini crossword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Identifier derived from the seed and the solution.
    pub id: PuzzleId,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
    /// The solved grid: every open cell holds a letter.
    pub grid: Grid,
    /// The numbered clues.
    pub definitions: Definitions,
}

impl Puzzle {
    /// Returns the grid shown to a solver, with every letter cleared.
    #[must_use]
    pub fn problem(&self) -> Grid {
        let mut grid = self.grid.clone();
        for pos in grid.positions() {
            if grid[pos].is_letter() {
                grid[pos] = Cell::Empty;
            }
        }
        grid
    }
}
