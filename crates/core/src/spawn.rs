//! Spawner - place one new tile after a successful move
//!
//! The target cell is drawn uniformly from the empty cells, so a spawn
//! always terminates and never overwrites an existing tile.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::types::{Tile, SPAWN_FOUR_PROBABILITY, SPAWN_TILE_HIGH, SPAWN_TILE_LOW};

/// A tile placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Draw the value of a new tile: 4 with probability 0.1, otherwise 2.
pub fn random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(SPAWN_FOUR_PROBABILITY) {
        SPAWN_TILE_HIGH
    } else {
        SPAWN_TILE_LOW
    }
}

/// Place one tile into a random empty cell.
///
/// Returns `None` (and leaves the grid untouched) if the grid is full.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Spawn> {
    let empty = grid.empty_cells();
    let &(row, col) = empty.choose(rng)?;
    let value = random_tile(rng);
    grid.set(row, col, value);
    Some(Spawn { row, col, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_fills_exactly_one_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, 8);

        let spawn = spawn_tile(&mut grid, &mut rng).unwrap();
        assert_ne!((spawn.row, spawn.col), (0, 0));
        assert_eq!(grid.get(0, 0), Some(8));
        assert_eq!(grid.get(spawn.row, spawn.col), Some(spawn.value));
        assert!(spawn.value == 2 || spawn.value == 4);
        assert_eq!(grid.count_empty(), 14);
    }

    #[test]
    fn test_spawn_on_full_grid_is_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::from_rows(&[[2u32, 4], [8, 16]]).unwrap();
        let before = grid.clone();
        assert_eq!(spawn_tile(&mut grid, &mut rng), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_spawn_finds_last_empty_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::from_rows(&[[2u32, 4], [8, 0]]).unwrap();
        let spawn = spawn_tile(&mut grid, &mut rng).unwrap();
        assert_eq!((spawn.row, spawn.col), (1, 1));
        assert!(!grid.has_empty());
    }

    #[test]
    fn test_fill_grid_by_spawning() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(3, 3);
        for _ in 0..9 {
            assert!(spawn_tile(&mut grid, &mut rng).is_some());
        }
        assert_eq!(grid.count_empty(), 0);
        assert!(spawn_tile(&mut grid, &mut rng).is_none());
    }

    #[test]
    fn test_tile_distribution_is_mostly_twos() {
        let mut rng = StdRng::seed_from_u64(2024);
        let fours = (0..10_000)
            .filter(|_| random_tile(&mut rng) == SPAWN_TILE_HIGH)
            .count();
        // Expected 1000; allow a wide band so the seed is not load-bearing.
        assert!((700..1300).contains(&fours), "fours = {}", fours);
    }
}
