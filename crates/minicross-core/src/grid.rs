//! Square crossword grid.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Cell, Pattern, Position, Slot};

/// A square grid of [`Cell`]s stored in row-major order.
///
/// The grid is the mutable workspace of the fill search: letters are written
/// into it slot by slot and restored on backtrack.
///
/// # Text Format
///
/// [`Display`] and [`FromStr`] use one row per line:
///
/// - `#` is a blocked cell
/// - `.` (or `_` when parsing) is an empty cell
/// - `A`-`Z` is a letter (lowercase is accepted when parsing)
///
/// Whitespace is ignored when parsing, so the total number of cell
/// characters must be a perfect square.
///
/// # Examples
///
/// ```
/// use minicross_core::{Cell, Grid, Position};
///
/// let mut grid = Grid::new(3);
/// grid[Position::new(1, 1)] = Cell::Blocked;
/// assert_eq!(grid.to_string(), "...\n.#.\n...");
///
/// let parsed: Grid = "... .#. ...".parse()?;
/// assert_eq!(parsed, grid);
/// # Ok::<(), minicross_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `size × size` grid with every cell [`Cell::Empty`].
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    /// Returns the cell at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[self.offset(pos)])
    }

    /// Returns `true` if `pos` lies inside the grid and is not blocked.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_open)
    }

    /// Iterates over all positions in raster (row-major) order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Returns the number of blocked cells.
    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_blocked()).count()
    }

    /// Returns `true` if every open cell holds a letter.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Reads the current letters along `slot`.
    ///
    /// # Panics
    ///
    /// Panics if the slot extends outside the grid.
    #[must_use]
    pub fn pattern(&self, slot: &Slot) -> Pattern {
        slot.positions().map(|pos| self[pos].letter()).collect()
    }

    /// Writes `word` along `slot`, one letter per cell.
    ///
    /// # Panics
    ///
    /// Panics if the slot extends outside the grid. Debug builds also panic if
    /// the word length differs from the slot length.
    pub fn place_word(&mut self, slot: &Slot, word: &str) {
        debug_assert_eq!(word.chars().count(), slot.length());
        for (pos, ch) in slot.positions().zip(word.chars()) {
            self[pos] = Cell::Letter(ch);
        }
    }

    /// Writes `pattern` back along `slot`, turning unknown letters into
    /// [`Cell::Empty`].
    ///
    /// Restoring the pattern read before [`place_word`](Self::place_word)
    /// returns the slot's cells to exactly their previous state.
    ///
    /// # Panics
    ///
    /// Panics if the slot extends outside the grid.
    pub fn restore(&mut self, slot: &Slot, pattern: &Pattern) {
        debug_assert_eq!(pattern.len(), slot.length());
        for (pos, letter) in slot.positions().zip(pattern.iter()) {
            self[pos] = letter.map_or(Cell::Empty, Cell::Letter);
        }
    }

    fn offset(&self, pos: Position) -> usize {
        pos.row() * self.size + pos.col()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        assert!(self.contains(pos), "position {pos} outside {0}x{0} grid", self.size);
        &self.cells[self.offset(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        assert!(self.contains(pos), "position {pos} outside {0}x{0} grid", self.size);
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                Display::fmt(cell, f)?;
            }
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input contained no cells.
    #[display("grid is empty")]
    Empty,
    /// The input contained a character that is not a cell.
    #[display("invalid grid character: {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// The number of cells is not a perfect square.
    #[display("{len} cells do not form a square grid")]
    NotSquare {
        /// The number of cells found.
        len: usize,
    },
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| Cell::from_char(ch).ok_or(GridParseError::InvalidChar { ch }))
            .collect::<Result<Vec<_>, _>>()?;
        if cells.is_empty() {
            return Err(GridParseError::Empty);
        }
        let size = cells.len().isqrt();
        if size * size != cells.len() {
            return Err(GridParseError::NotSquare { len: cells.len() });
        }
        Ok(Self { size, cells })
    }
}
