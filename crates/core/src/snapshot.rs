//! Persisted snapshot of a round: the grid contents and the score.
//!
//! The snapshot carries no derived fields. It deserializes from untrusted
//! storage, so [`Snapshot::to_grid`] validates shape and tile values before
//! anything reaches a [`GameState`](crate::GameState).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Grid, GridError};
use crate::types::Tile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Vec<Vec<Tile>>,
    pub score: u64,
}

impl Snapshot {
    pub fn from_grid(grid: &Grid, score: u64) -> Self {
        Self {
            grid: grid.to_rows(),
            score,
        }
    }

    /// Validate and convert the stored rows into a [`Grid`].
    pub fn to_grid(&self) -> Result<Grid, SnapshotError> {
        Ok(Grid::from_rows(&self.grid)?)
    }
}
