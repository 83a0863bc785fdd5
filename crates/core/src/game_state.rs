//! Game state module - owns the grid and score of one play session
//!
//! This module ties together the grid, the move engine and the spawner, and
//! implements the round lifecycle: new game, input handling, snapshot and
//! restore.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::grid::Grid;
use crate::moves::apply_move;
use crate::snapshot::{Snapshot, SnapshotError};
use crate::spawn::{spawn_tile, Spawn};
use crate::types::{Direction, GameAction, DEFAULT_COLS, DEFAULT_ROWS, STARTING_TILES};

/// What a single input did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveReport {
    pub changed: bool,
    /// Points gained by this input (0 if nothing changed).
    pub score_delta: u64,
    pub spawn: Option<Spawn>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    score: u64,
    rng: StdRng,
    /// Most recent tile placed by the spawner (cleared on restore).
    last_spawn: Option<Spawn>,
}

impl GameState {
    /// Start a new game seeded from OS entropy.
    ///
    /// Dimensions are clamped as in [`GameState::new_game`].
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_rng(rows, cols, StdRng::from_entropy())
    }

    /// Start a new game with a fixed seed (reproducible spawns).
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Self {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rows: usize, cols: usize, rng: StdRng) -> Self {
        let mut state = Self {
            grid: Grid::new(rows, cols),
            score: 0,
            rng,
            last_spawn: None,
        };
        state.new_game(rows, cols);
        state
    }

    /// Replace the grid with an empty one, reset the score and place the
    /// starting tiles.
    ///
    /// `rows` and `cols` are clamped to `MIN_DIMENSION..=MAX_DIMENSION`
    /// (2..=16), so `new_game(1, 1)` starts a 2 x 2 game.
    pub fn new_game(&mut self, rows: usize, cols: usize) {
        self.grid = Grid::new(rows, cols);
        self.score = 0;
        self.last_spawn = None;
        for _ in 0..STARTING_TILES {
            self.last_spawn = spawn_tile(&mut self.grid, &mut self.rng);
        }
        info!("new game {}x{}", self.grid.rows(), self.grid.cols());
    }

    /// New game with the current dimensions.
    pub fn restart(&mut self) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        self.new_game(rows, cols);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn last_spawn(&self) -> Option<Spawn> {
        self.last_spawn
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Apply a move; on change, add the merge score and spawn one tile.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        let outcome = apply_move(&mut self.grid, direction);
        if !outcome.changed {
            return MoveReport::default();
        }

        self.score += outcome.score;
        let spawn = spawn_tile(&mut self.grid, &mut self.rng);
        self.last_spawn = spawn;
        debug!(
            "move {} scored {} (total {})",
            direction.as_str(),
            outcome.score,
            self.score
        );

        MoveReport {
            changed: true,
            score_delta: outcome.score,
            spawn,
        }
    }

    /// Apply a move and report whether the grid changed.
    pub fn apply_input(&mut self, direction: Direction) -> bool {
        self.apply_move(direction).changed
    }

    /// Apply a game action
    ///
    /// View toggles are not game-state actions and return false.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_input(direction),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::ToggleLabels | GameAction::ToggleInfo => false,
        }
    }

    /// Capture grid and score.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_grid(&self.grid, self.score)
    }

    /// Replace grid and score with the snapshot contents.
    ///
    /// The snapshot is validated first; on error the state is left untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let grid = snapshot.to_grid()?;
        self.grid = grid;
        self.score = snapshot.score;
        self.last_spawn = None;
        Ok(())
    }

    /// Restore from `snapshot`, or start a new `rows` x `cols` game if it is
    /// missing or invalid. Returns true if the snapshot was restored.
    pub fn restore_or_new(&mut self, snapshot: Option<&Snapshot>, rows: usize, cols: usize) -> bool {
        match snapshot.map(|s| self.restore(s)) {
            Some(Ok(())) => {
                info!("restored game with score {}", self.score);
                true
            }
            Some(Err(e)) => {
                warn!("discarding stored game: {}", e);
                self.new_game(rows, cols);
                false
            }
            None => {
                self.new_game(rows, cols);
                false
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
