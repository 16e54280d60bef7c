use minicross_core::{Cell, Grid, Position, Slot};
use rand::{Rng, seq::index};

/// Builds a `size`×`size` grid with `black_cells` distinct blocked cells.
///
/// Positions are drawn uniformly without replacement; the count is clamped
/// to the number of cells. The layout is not checked for connectivity or
/// symmetry: unfillable layouts are rejected later by the filler.
///
/// # Examples
///
/// ```
/// use minicross_generator::build_topology;
/// use rand::SeedableRng as _;
///
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
/// let grid = build_topology(5, 4, &mut rng);
/// assert_eq!(grid.size(), 5);
/// assert_eq!(grid.blocked_count(), 4);
/// ```
pub fn build_topology<R>(size: usize, black_cells: usize, rng: &mut R) -> Grid
where
    R: Rng + ?Sized,
{
    let mut grid = Grid::new(size);
    let cells = size * size;
    for i in index::sample(rng, cells, black_cells.min(cells)) {
        grid[Position::new(i / size, i % size)] = Cell::Blocked;
    }
    grid
}

/// Blocks every open cell that no slot passes through.
///
/// Such a cell has no open neighbor in either direction, so blocking it
/// leaves every slot unchanged. Afterwards a fill that covers `slots` leaves
/// no open cell empty. Returns the number of cells blocked.
pub(crate) fn block_isolated_cells(grid: &mut Grid, slots: &[Slot]) -> usize {
    let mut covered = vec![false; grid.size() * grid.size()];
    for pos in slots.iter().flat_map(Slot::positions) {
        covered[pos.row() * grid.size() + pos.col()] = true;
    }
    let mut blocked = 0;
    for pos in grid.positions() {
        if grid.is_open(pos) && !covered[pos.row() * grid.size() + pos.col()] {
            grid[pos] = Cell::Blocked;
            blocked += 1;
        }
    }
    blocked
}

/// Draws the black cell count for a `size`×`size` grid.
///
/// The count is `floor(size² × percent / 100)` plus a uniform jitter in
/// `0..=jitter`.
pub(crate) fn black_cell_count<R>(size: usize, percent: u32, jitter: usize, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let base = size * size * percent as usize / 100;
    base + rng.random_range(0..=jitter)
}

#[cfg(test)]
mod tests {
    use minicross_core::extract_slots;
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_black_cell_count() {
        let mut rng = Pcg64::seed_from_u64(0);
        assert_eq!(black_cell_count(5, 15, 0, &mut rng), 3);
        assert_eq!(black_cell_count(6, 15, 0, &mut rng), 5);
        assert_eq!(black_cell_count(4, 0, 0, &mut rng), 0);
        assert_eq!(black_cell_count(4, 100, 0, &mut rng), 16);
        for _ in 0..100 {
            let count = black_cell_count(5, 15, 1, &mut rng);
            assert!((3..=4).contains(&count));
        }
    }

    #[test]
    fn test_clamps_to_cell_count() {
        let mut rng = Pcg64::seed_from_u64(1);
        let grid = build_topology(3, 20, &mut rng);
        assert_eq!(grid.blocked_count(), 9);
    }

    #[test]
    fn test_no_black_cells() {
        let mut rng = Pcg64::seed_from_u64(2);
        assert_eq!(build_topology(4, 0, &mut rng), Grid::new(4));
    }

    #[test]
    fn test_isolated_cells_are_blocked() {
        let mut grid: Grid = "..# #.# .#.".parse().unwrap();
        let slots = extract_slots(&grid);
        assert_eq!(block_isolated_cells(&mut grid, &slots), 2);
        assert_eq!(grid.to_string(), "..#\n#.#\n###");
        assert_eq!(extract_slots(&grid), slots);
    }

    proptest! {
        #[test]
        fn test_exact_black_cell_count(size in 1usize..=7, black in 0usize..60, seed: u64) {
            let mut rng = Pcg64::seed_from_u64(seed);
            let grid = build_topology(size, black, &mut rng);
            prop_assert_eq!(grid.size(), size);
            prop_assert_eq!(grid.blocked_count(), black.min(size * size));
            prop_assert!(grid.positions().all(|pos| !grid[pos].is_letter()));
        }

        #[test]
        fn test_same_seed_same_layout(size in 2usize..=6, black in 0usize..10, seed: u64) {
            let a = build_topology(size, black, &mut Pcg64::seed_from_u64(seed));
            let b = build_topology(size, black, &mut Pcg64::seed_from_u64(seed));
            prop_assert_eq!(a, b);
        }

        #[test]
        fn test_blocking_isolated_cells_keeps_slots(size in 2usize..=6, black in 0usize..20, seed: u64) {
            let mut grid = build_topology(size, black, &mut Pcg64::seed_from_u64(seed));
            let slots = extract_slots(&grid);
            block_isolated_cells(&mut grid, &slots);
            prop_assert_eq!(extract_slots(&grid), slots.clone());
            for pos in grid.positions().filter(|&pos| grid.is_open(pos)) {
                prop_assert!(slots.iter().any(|slot| slot.offset_of(pos).is_some()));
            }
        }
    }
}
