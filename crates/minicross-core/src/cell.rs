//! Grid cell representation.

use std::fmt::{self, Display};

/// A single cell of a crossword grid.
///
/// # Examples
///
/// ```
/// use minicross_core::Cell;
///
/// assert!(Cell::Blocked.is_blocked());
/// assert!(Cell::default().is_empty());
/// assert_eq!(Cell::Letter('A').letter(), Some('A'));
/// assert!(Cell::Empty.is_open());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Cell {
    /// A black cell that separates words.
    Blocked,
    /// An open cell with no letter yet.
    #[default]
    Empty,
    /// An open cell holding a letter.
    Letter(char),
}

impl Cell {
    /// Character used for blocked cells in the grid text format.
    pub const BLOCKED_CHAR: char = '#';

    /// Character used for empty cells in the grid text format.
    pub const EMPTY_CHAR: char = '.';

    /// Returns `true` if a word can pass through this cell.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Blocked)
    }

    /// Returns the letter held by this cell, if any.
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(ch) => Some(ch),
            Self::Blocked | Self::Empty => None,
        }
    }

    /// Parses a cell from its text format character.
    ///
    /// Accepts `#` for blocked cells, `.` or `_` for empty cells, and ASCII
    /// letters (normalized to uppercase).
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::BLOCKED_CHAR => Some(Self::Blocked),
            Self::EMPTY_CHAR | '_' => Some(Self::Empty),
            ch if ch.is_ascii_alphabetic() => Some(Self::Letter(ch.to_ascii_uppercase())),
            _ => None,
        }
    }

    /// Returns the text format character for this cell.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Blocked => Self::BLOCKED_CHAR,
            Self::Empty => Self::EMPTY_CHAR,
            Self::Letter(ch) => ch,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_char(), f)
    }
}
