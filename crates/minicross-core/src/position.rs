//! Grid coordinates.

use std::fmt::{self, Display};

/// A cell coordinate in a grid.
///
/// Positions are ordered row-major, so sorting positions yields the raster
/// scan order used for clue numbering.
///
/// # Examples
///
/// ```
/// use minicross_core::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 3);
/// assert!(Position::new(0, 4) < Position::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0 is the top row).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0 is the leftmost column).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position `n` cells to the right.
    #[must_use]
    pub const fn right(self, n: usize) -> Self {
        Self::new(self.row, self.col + n)
    }

    /// Returns the position `n` cells below.
    #[must_use]
    pub const fn below(self, n: usize) -> Self {
        Self::new(self.row + n, self.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_row_major() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 0),
            Position::new(1, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_offsets_and_display() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.right(2), Position::new(2, 5));
        assert_eq!(pos.below(1), Position::new(3, 3));
        assert_eq!(pos.to_string(), "(2, 3)");
    }
}
