//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the tile-merging puzzle and the round
//! lifecycle. It has no dependencies on the terminal, storage, or any other
//! I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same spawns
//! - **Testable**: every rule is covered by unit and property tests
//! - **Portable**: any host can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: R x C tile matrix with flat row-major storage
//! - [`line`]: the line reducer (slide + single-pass merge)
//! - [`moves`]: the move engine applying the reducer in four directions
//! - [`spawn`]: uniform placement of new 2/4 tiles
//! - [`game_state`]: grid + score + lifecycle (new, move, snapshot, restore)
//! - [`snapshot`]: persisted `{grid, score}` record with validation
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::Direction;
//!
//! let mut game = GameState::with_seed(4, 4, 12345);
//! assert_eq!(game.grid().count_empty(), 14);
//!
//! let snapshot = game.snapshot();
//! game.apply_input(Direction::Left);
//!
//! game.restore(&snapshot).unwrap();
//! assert_eq!(game.snapshot(), snapshot);
//! ```

pub mod game_state;
pub mod grid;
pub mod line;
pub mod moves;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, MoveReport};
pub use grid::{Grid, GridError};
pub use line::{reduce, reduce_line};
pub use moves::{apply_move, MoveOutcome};
pub use snapshot::{Snapshot, SnapshotError};
pub use spawn::{random_tile, spawn_tile, Spawn};
