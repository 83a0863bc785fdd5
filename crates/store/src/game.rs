//! Save and load a [`GameState`] through a [`KeyValueStore`].

use anyhow::{Context, Result};
use log::{info, warn};

use crate::core::{GameState, Snapshot};
use crate::types::Tile;
use crate::KeyValueStore;

pub const BOARD_KEY: &str = "board";
pub const SCORE_KEY: &str = "score";

/// How [`load_game`] produced the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The stored game was valid and is now active.
    Restored,
    /// Nothing was stored; a new game was started.
    Fresh,
    /// The stored game was malformed; a new game was started.
    Discarded,
}

/// Write grid and score under [`BOARD_KEY`] and [`SCORE_KEY`] in one
/// [`KeyValueStore::set_all`] call.
pub fn save_game<S: KeyValueStore + ?Sized>(store: &mut S, state: &GameState) -> Result<()> {
    let snapshot = state.snapshot();
    let board = serde_json::to_string(&snapshot.grid).context("encoding board")?;
    store.set_all(vec![
        (BOARD_KEY, board),
        (SCORE_KEY, snapshot.score.to_string()),
    ])?;
    info!("saved game with score {}", snapshot.score);
    Ok(())
}

/// Read the stored snapshot.
///
/// `Ok(None)` if either key is missing. Errors if a value does not parse
/// (wrong JSON shape, negative or fractional numbers). Tile values are not
/// checked here; [`GameState::restore`] does that.
pub fn load_snapshot<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Snapshot>> {
    let (Some(board), Some(score)) = (store.get(BOARD_KEY), store.get(SCORE_KEY)) else {
        return Ok(None);
    };

    let grid: Vec<Vec<Tile>> = serde_json::from_str(&board).context("decoding board")?;
    let score: u64 = score
        .trim()
        .parse()
        .with_context(|| format!("decoding score {:?}", score))?;

    Ok(Some(Snapshot { grid, score }))
}

/// Load the stored game into `state`, or start a `rows` x `cols` game.
pub fn load_game<S: KeyValueStore + ?Sized>(
    store: &S,
    state: &mut GameState,
    rows: usize,
    cols: usize,
) -> LoadOutcome {
    match load_snapshot(store) {
        Ok(Some(snapshot)) => {
            if state.restore_or_new(Some(&snapshot), rows, cols) {
                LoadOutcome::Restored
            } else {
                LoadOutcome::Discarded
            }
        }
        Ok(None) => {
            state.new_game(rows, cols);
            LoadOutcome::Fresh
        }
        Err(e) => {
            warn!("discarding stored game: {:#}", e);
            state.new_game(rows, cols);
            LoadOutcome::Discarded
        }
    }
}
