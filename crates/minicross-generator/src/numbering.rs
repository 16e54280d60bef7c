use std::fmt;

use minicross_core::{Direction, Grid, Position};
use minicross_filler::Assignment;

/// A numbered clue of a finished puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    /// Number printed in the clue's first cell.
    pub number: usize,
    /// The definition shown to the solver.
    pub clue: String,
    /// The normalized word filling the slot.
    pub answer: String,
    /// Number of cells in the slot.
    pub length: usize,
    /// Row of the first cell.
    pub row: usize,
    /// Column of the first cell.
    pub col: usize,
}

impl Clue {
    /// Returns the position of the clue's first cell.
    #[must_use]
    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({})", self.number, self.clue, self.length)
    }
}

/// Clues grouped by direction, each list in ascending number order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Definitions {
    /// Horizontal clues.
    pub across: Vec<Clue>,
    /// Vertical clues.
    pub down: Vec<Clue>,
}

impl Definitions {
    /// Returns the clues of one direction.
    #[must_use]
    pub fn clues(&self, direction: Direction) -> &[Clue] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Returns the total number of clues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    /// Returns `true` if there are no clues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    /// Iterates over across clues, then down clues.
    pub fn iter(&self) -> impl Iterator<Item = &Clue> {
        self.across.iter().chain(&self.down)
    }
}

/// Numbers the filled slots of `grid` in raster order.
///
/// A cell is a numbering point if it starts an across run (left edge or a
/// blocked cell on its left, open cell on its right) or a down run (top edge
/// or a blocked cell above, open cell below). Numbers start at 1 and grow by
/// one per numbering point, so a cell starting both runs gives its number to
/// two clues.
///
/// Numbering points without a matching assignment get a number but no clue.
///
/// # Examples
///
/// ```
/// use minicross_core::{DictionaryEntry, Grid, WordIndex, extract_slots};
/// use minicross_filler::BacktrackingFiller;
/// use minicross_generator::number_clues;
///
/// let index: WordIndex = [("se", "Pronom."), ("or", "Métal."), ("so", "Donc."), ("er", "Suffixe.")]
///     .into_iter()
///     .map(|(word, def)| DictionaryEntry::new(word, def))
///     .collect::<Result<_, _>>()?;
/// let mut grid = Grid::new(2);
/// let slots = extract_slots(&grid);
/// let fill = BacktrackingFiller::default()
///     .fill(&mut grid, &slots, &index, &mut rand::rng())
///     .unwrap();
///
/// let definitions = number_clues(&grid, fill.assignments());
/// let across: Vec<_> = definitions.across.iter().map(|clue| clue.number).collect();
/// let down: Vec<_> = definitions.down.iter().map(|clue| clue.number).collect();
/// assert_eq!(across, [1, 3]);
/// assert_eq!(down, [1, 2]);
/// # Ok::<(), minicross_core::EntryError>(())
/// ```
#[must_use]
pub fn number_clues(grid: &Grid, assignments: &[Assignment<'_>]) -> Definitions {
    let mut definitions = Definitions::default();
    let mut number = 0;

    for pos in grid.positions() {
        if !grid.is_open(pos) {
            continue;
        }
        let starts = Direction::ALL.map(|direction| starts_run(grid, pos, direction));
        if !starts.contains(&true) {
            continue;
        }
        number += 1;

        for (direction, starts) in Direction::ALL.into_iter().zip(starts) {
            if !starts {
                continue;
            }
            let assignment = assignments
                .iter()
                .find(|a| a.slot().direction() == direction && a.slot().start() == pos);
            let Some(assignment) = assignment else {
                log::trace!("numbering point {pos} has no {direction} assignment");
                continue;
            };
            let clue = Clue {
                number,
                clue: assignment.entry().definition().to_owned(),
                answer: assignment.word().to_owned(),
                length: assignment.slot().length(),
                row: pos.row(),
                col: pos.col(),
            };
            match direction {
                Direction::Across => definitions.across.push(clue),
                Direction::Down => definitions.down.push(clue),
            }
        }
    }

    definitions
}

fn starts_run(grid: &Grid, pos: Position, direction: Direction) -> bool {
    let (before_open, after) = match direction {
        Direction::Across => (
            pos.col() > 0 && grid.is_open(Position::new(pos.row(), pos.col() - 1)),
            pos.right(1),
        ),
        Direction::Down => (
            pos.row() > 0 && grid.is_open(Position::new(pos.row() - 1, pos.col())),
            pos.below(1),
        ),
    };
    !before_open && grid.is_open(after)
}
