//! Word slots and slot extraction.

use crate::{Grid, Position};

/// Orientation of a word slot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Direction {
    /// Left to right along a row.
    #[display("across")]
    Across,
    /// Top to bottom along a column.
    #[display("down")]
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];
}

/// A maximal run of open cells in one row or column.
///
/// A slot only describes geometry. It is derived from a grid's layout and is
/// meaningless once the grid's blocked cells change.
///
/// # Examples
///
/// ```
/// use minicross_core::{Direction, Position, Slot};
///
/// let slot = Slot::new(Direction::Down, Position::new(1, 2), 3);
/// let cells: Vec<_> = slot.positions().collect();
/// assert_eq!(cells, [Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]);
/// assert_eq!(slot.offset_of(Position::new(3, 2)), Some(2));
/// assert_eq!(slot.offset_of(Position::new(3, 1)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    direction: Direction,
    start: Position,
    length: usize,
}

impl Slot {
    /// Creates a slot starting at `start` and running `length` cells in
    /// `direction`.
    #[must_use]
    pub const fn new(direction: Direction, start: Position, length: usize) -> Self {
        Self {
            direction,
            start,
            length,
        }
    }

    /// Returns the slot orientation.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the first cell of the slot.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the number of cells in the slot.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the cell `offset` steps from the start.
    #[must_use]
    pub const fn position_at(&self, offset: usize) -> Position {
        match self.direction {
            Direction::Across => self.start.right(offset),
            Direction::Down => self.start.below(offset),
        }
    }

    /// Iterates over the slot's cells from start to end.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let slot = *self;
        (0..slot.length).map(move |offset| slot.position_at(offset))
    }

    /// Returns the offset of `pos` within the slot, if the slot covers it.
    #[must_use]
    pub fn offset_of(&self, pos: Position) -> Option<usize> {
        let (along, fixed_matches, start_along) = match self.direction {
            Direction::Across => (pos.col(), pos.row() == self.start.row(), self.start.col()),
            Direction::Down => (pos.row(), pos.col() == self.start.col(), self.start.row()),
        };
        (fixed_matches && along >= start_along && along < start_along + self.length)
            .then(|| along - start_along)
    }
}

/// Extracts every across and down slot from `grid`.
///
/// Each row is scanned left to right and each column top to bottom; every
/// maximal run of at least two open cells becomes a slot starting at the run's
/// first cell. Single open cells belong to no slot in that direction.
///
/// Across slots are returned first in row-major order, followed by down slots
/// in column-major order. The function only reads the grid, so repeated calls
/// return identical results.
///
/// # Examples
///
/// ```
/// use minicross_core::{Direction, Grid, Position, Slot, extract_slots};
///
/// let grid: Grid = "
///     ...
///     #..
///     ..#
/// "
/// .parse()?;
///
/// let slots = extract_slots(&grid);
/// assert!(slots.contains(&Slot::new(Direction::Across, Position::new(0, 0), 3)));
/// assert!(slots.contains(&Slot::new(Direction::Down, Position::new(0, 1), 3)));
/// // the blocked cell at (2, 2) cuts the last row short
/// assert!(slots.contains(&Slot::new(Direction::Across, Position::new(2, 0), 2)));
/// # Ok::<(), minicross_core::GridParseError>(())
/// ```
#[must_use]
pub fn extract_slots(grid: &Grid) -> Vec<Slot> {
    let size = grid.size();
    let mut slots = vec![];
    for direction in Direction::ALL {
        for line in 0..size {
            let line_start = match direction {
                Direction::Across => Position::new(line, 0),
                Direction::Down => Position::new(0, line),
            };
            let line = Slot::new(direction, line_start, size);
            let mut run_start = None;
            // One past the end closes a run that reaches the grid edge.
            for offset in 0..=size {
                let open = offset < size && grid.is_open(line.position_at(offset));
                match (open, run_start) {
                    (true, None) => run_start = Some(offset),
                    (false, Some(start)) => {
                        if offset - start >= 2 {
                            slots.push(Slot::new(direction, line.position_at(start), offset - start));
                        }
                        run_start = None;
                    }
                    _ => {}
                }
            }
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::Cell;

    fn slots_of(s: &str) -> Vec<Slot> {
        extract_slots(&s.parse().unwrap())
    }

    #[test]
    fn test_open_grid_has_one_slot_per_line() {
        let slots = extract_slots(&Grid::new(5));
        assert_eq!(slots.len(), 10);
        assert!(slots.iter().all(|slot| slot.length() == 5));
        assert_eq!(slots.iter().filter(|s| s.direction().is_across()).count(), 5);
        assert_eq!(
            slots[0],
            Slot::new(Direction::Across, Position::new(0, 0), 5)
        );
        assert_eq!(slots[5], Slot::new(Direction::Down, Position::new(0, 0), 5));
    }

    #[test]
    fn test_single_cells_are_dropped() {
        let slots = slots_of(
            "
            .#.
            #.#
            .#.
        ",
        );
        assert!(slots.is_empty());
    }

    #[test]
    fn test_runs_split_by_blocked_cells() {
        let slots = slots_of(
            "
            ..#..
            .....
            #...#
            .....
            ..#..
        ",
        );
        let across: Vec<_> = slots
            .iter()
            .filter(|s| s.direction() == Direction::Across)
            .map(|s| (s.start(), s.length()))
            .collect();
        assert_eq!(
            across,
            [
                (Position::new(0, 0), 2),
                (Position::new(0, 3), 2),
                (Position::new(1, 0), 5),
                (Position::new(2, 1), 3),
                (Position::new(3, 0), 5),
                (Position::new(4, 0), 2),
                (Position::new(4, 3), 2),
            ]
        );
        let down: Vec<_> = slots
            .iter()
            .filter(|s| s.direction() == Direction::Down)
            .map(|s| (s.start(), s.length()))
            .collect();
        assert_eq!(
            down,
            [
                (Position::new(0, 0), 2),
                (Position::new(3, 0), 2),
                (Position::new(0, 1), 5),
                (Position::new(1, 2), 3),
                (Position::new(0, 3), 5),
                (Position::new(0, 4), 2),
                (Position::new(3, 4), 2),
            ]
        );
    }

    #[test]
    fn test_letters_do_not_affect_slots() {
        assert_eq!(slots_of("AB CD"), slots_of(".. .."));
        assert_eq!(slots_of("AB CD").len(), 4);
    }

    #[test]
    fn test_offset_of() {
        let slot = Slot::new(Direction::Across, Position::new(2, 1), 3);
        assert_eq!(slot.offset_of(Position::new(2, 1)), Some(0));
        assert_eq!(slot.offset_of(Position::new(2, 3)), Some(2));
        assert_eq!(slot.offset_of(Position::new(2, 4)), None);
        assert_eq!(slot.offset_of(Position::new(2, 0)), None);
        assert_eq!(slot.offset_of(Position::new(1, 2)), None);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..=7).prop_flat_map(|size| {
            prop::collection::vec(prop::bool::weighted(0.25), size * size).prop_map(move |blocked| {
                let mut grid = Grid::new(size);
                for (pos, blocked) in grid.positions().zip(blocked) {
                    if blocked {
                        grid[pos] = Cell::Blocked;
                    }
                }
                grid
            })
        })
    }

    proptest! {
        #[test]
        fn prop_slots_are_long_enough_and_open(grid in arb_grid()) {
            for slot in extract_slots(&grid) {
                prop_assert!(slot.length() >= 2);
                for pos in slot.positions() {
                    prop_assert!(grid.is_open(pos));
                }
            }
        }

        #[test]
        fn prop_slots_are_maximal(grid in arb_grid()) {
            for slot in extract_slots(&grid) {
                let (before, after) = match slot.direction() {
                    Direction::Across => (
                        slot.start().col().checked_sub(1).map(|c| Position::new(slot.start().row(), c)),
                        slot.position_at(slot.length()),
                    ),
                    Direction::Down => (
                        slot.start().row().checked_sub(1).map(|r| Position::new(r, slot.start().col())),
                        slot.position_at(slot.length()),
                    ),
                };
                prop_assert!(before.is_none_or(|pos| !grid.is_open(pos)));
                prop_assert!(!grid.is_open(after));
            }
        }

        #[test]
        fn prop_every_open_run_cell_is_covered(grid in arb_grid()) {
            let slots = extract_slots(&grid);
            for pos in grid.positions().filter(|&pos| grid.is_open(pos)) {
                let has_across_neighbor = (pos.col() > 0 && grid.is_open(Position::new(pos.row(), pos.col() - 1)))
                    || grid.is_open(pos.right(1));
                let covered = slots
                    .iter()
                    .any(|s| s.direction() == Direction::Across && s.offset_of(pos).is_some());
                prop_assert_eq!(has_across_neighbor, covered);
            }
        }

        #[test]
        fn prop_extraction_is_idempotent(grid in arb_grid()) {
            let first: HashSet<_> = extract_slots(&grid).into_iter().collect();
            let second: HashSet<_> = extract_slots(&grid).into_iter().collect();
            prop_assert_eq!(first, second);
        }
    }
}
