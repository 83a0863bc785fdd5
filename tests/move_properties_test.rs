//! Property tests for the move engine, spawner and snapshot laws.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::core::{apply_move, reduce, spawn_tile, GameState, Grid, Snapshot};
use tui_2048::types::{Direction, Tile, MAX_TILE};

fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        3 => Just(0u32),
        2 => (1u32..=6).prop_map(|k| 1 << k),
        1 => (29u32..=30).prop_map(|k| 1 << k),
    ]
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (2usize..=6, 2usize..=6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(tile(), rows * cols).prop_map(move |cells| {
            let nested: Vec<Vec<Tile>> = cells.chunks(cols).map(|c| c.to_vec()).collect();
            Grid::from_rows(&nested).unwrap()
        })
    })
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

fn moved(grid: &Grid, dir: Direction) -> (Grid, u64) {
    let mut g = grid.clone();
    let outcome = apply_move(&mut g, dir);
    (g, outcome.score)
}

proptest! {
    #[test]
    fn right_is_mirrored_left(grid in arb_grid()) {
        let (right, right_score) = moved(&grid, Direction::Right);
        let (left, left_score) = moved(&grid.reverse_rows(), Direction::Left);
        prop_assert_eq!(right, left.reverse_rows());
        prop_assert_eq!(right_score, left_score);
    }

    #[test]
    fn up_is_transposed_left(grid in arb_grid()) {
        let (up, up_score) = moved(&grid, Direction::Up);
        let (left, left_score) = moved(&grid.transpose(), Direction::Left);
        prop_assert_eq!(up, left.transpose());
        prop_assert_eq!(up_score, left_score);
    }

    #[test]
    fn down_is_flipped_up(grid in arb_grid()) {
        let (down, down_score) = moved(&grid, Direction::Down);
        let (up, up_score) = moved(&grid.reverse_cols(), Direction::Up);
        prop_assert_eq!(down, up.reverse_cols());
        prop_assert_eq!(down_score, up_score);
    }

    #[test]
    fn changed_flag_matches_grid_difference(grid in arb_grid(), dir in arb_direction()) {
        let mut g = grid.clone();
        let outcome = apply_move(&mut g, dir);
        prop_assert_eq!(outcome.changed, g != grid);
        if !outcome.changed {
            prop_assert_eq!(outcome.score, 0);
        }
    }

    #[test]
    fn left_move_packs_every_row(grid in arb_grid()) {
        let (left, _) = moved(&grid, Direction::Left);
        for r in 0..left.rows() {
            let row = left.row(r).unwrap();
            let filled = row.iter().take_while(|&&v| v != 0).count();
            prop_assert!(row[filled..].iter().all(|&v| v == 0), "row {:?}", row);
        }
        let before: u64 = grid.cells().iter().map(|&v| v as u64).sum();
        let after: u64 = left.cells().iter().map(|&v| v as u64).sum();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn repeated_reduce_reaches_fixpoint(line in prop::collection::vec(tile(), 0..8)) {
        let (mut current, _) = reduce(&line);
        let mut passes = 0;
        loop {
            let (next, score) = reduce(&current);
            if score == 0 {
                prop_assert_eq!(&next, &current);
                break;
            }
            current = next;
            passes += 1;
            prop_assert!(passes <= line.len());
        }
        prop_assert!(current
            .windows(2)
            .all(|w| w[0] == 0 || w[0] == MAX_TILE || w[0] != w[1]));
    }

    #[test]
    fn score_never_decreases(seed in any::<u64>(), dirs in prop::collection::vec(arb_direction(), 0..60)) {
        let mut state = GameState::with_seed(4, 4, seed);
        let mut last = state.score();
        for dir in dirs {
            state.apply_input(dir);
            prop_assert!(state.score() >= last);
            last = state.score();
        }
    }

    #[test]
    fn snapshot_round_trips(seed in any::<u64>(), dirs in prop::collection::vec(arb_direction(), 0..30)) {
        let mut state = GameState::with_seed(4, 4, seed);
        for dir in dirs {
            state.apply_input(dir);
        }
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        let decoded: Snapshot = serde_json::from_str(&json).unwrap();

        let mut other = GameState::with_seed(3, 3, seed ^ 1);
        other.restore(&decoded).unwrap();
        prop_assert_eq!(other.grid(), state.grid());
        prop_assert_eq!(other.score(), state.score());
    }

    #[test]
    fn moves_on_large_tiles_stay_restorable(grid in arb_grid(), dirs in prop::collection::vec(arb_direction(), 1..12)) {
        let mut state = GameState::with_seed(grid.rows(), grid.cols(), 3);
        state
            .restore(&Snapshot::from_grid(&grid, 0))
            .unwrap();
        for dir in dirs {
            state.apply_input(dir);
            let mut other = GameState::with_seed(2, 2, 4);
            prop_assert!(other.restore(&state.snapshot()).is_ok());
            prop_assert_eq!(other.grid(), state.grid());
        }
    }

    #[test]
    fn spawn_adds_exactly_one_tile(grid in arb_grid(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g = grid.clone();
        match spawn_tile(&mut g, &mut rng) {
            Some(spawn) => {
                prop_assert_eq!(grid.get(spawn.row, spawn.col), Some(0));
                prop_assert!(spawn.value == 2 || spawn.value == 4);
                prop_assert_eq!(g.count_empty() + 1, grid.count_empty());
                for (before, after) in grid.cells().iter().zip(g.cells()) {
                    if *before != 0 {
                        prop_assert_eq!(before, after);
                    }
                }
            }
            None => {
                prop_assert!(!grid.has_empty());
                prop_assert_eq!(g, grid);
            }
        }
    }
}
