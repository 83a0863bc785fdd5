//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, usable from the core rules, the
//! terminal view and the persistence layer alike.
//!
//! # Grid Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 4 | Rows of a new grid |
//! | `DEFAULT_COLS` | 4 | Columns of a new grid |
//! | `MIN_DIMENSION` | 2 | Smallest accepted side length |
//! | `MAX_DIMENSION` | 16 | Largest accepted side length |
//!
//! # Spawn Policy
//!
//! After every move that changes the grid, one tile appears in a uniformly
//! chosen empty cell: a `4` with probability [`SPAWN_FOUR_PROBABILITY`],
//! otherwise a `2`.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, is_tile_value};
//!
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(Direction::Up.as_str(), "up");
//!
//! assert_eq!(
//!     GameAction::from_str("moveDown"),
//!     Some(GameAction::Move(Direction::Down))
//! );
//!
//! assert!(is_tile_value(0));
//! assert!(is_tile_value(2048));
//! assert!(!is_tile_value(3));
//! ```

use serde::{Deserialize, Serialize};

/// A single grid cell value: `0` for empty, otherwise a power of two >= 2.
pub type Tile = u32;

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 4;

/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 4;

/// Smallest accepted grid side length.
pub const MIN_DIMENSION: usize = 2;

/// Largest accepted grid side length.
pub const MAX_DIMENSION: usize = 16;

/// Value of the common spawned tile.
pub const SPAWN_TILE_LOW: Tile = 2;

/// Value of the rare spawned tile.
pub const SPAWN_TILE_HIGH: Tile = 4;

/// Probability that a spawned tile is [`SPAWN_TILE_HIGH`].
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// Number of tiles placed by a fresh game.
pub const STARTING_TILES: usize = 2;

/// Largest tile value (2^30).
///
/// Two tiles of this value never merge, so no move can produce a value
/// that a stored snapshot would be refused for.
pub const MAX_TILE: Tile = 1 << 30;

/// True for `0` and for powers of two in `2..=MAX_TILE`.
pub fn is_tile_value(value: Tile) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}


/// Move directions.
///
/// Each direction names the edge tiles slide toward:
/// - **Left** / **Right**: rows, traversed toward column 0 / the last column
/// - **Up** / **Down**: columns, traversed toward row 0 / the last row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// True for directions that operate on rows.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

}

/// Actions a player (or any other driver) can issue.
///
/// Only [`GameAction::Move`] and [`GameAction::Restart`] touch the game state;
/// the remaining variants are view toggles handled by the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge toward the given edge
    Move(Direction),
    /// Start a fresh round with the current dimensions
    Restart,
    /// Switch tile labels between numbers and catalog names
    ToggleLabels,
    /// Enter or leave the tile catalog view
    ToggleInfo,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "restart" => Some(GameAction::Restart),
            "togglelabels" => Some(GameAction::ToggleLabels),
            "toggleinfo" => Some(GameAction::ToggleInfo),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Restart => "restart",
            GameAction::ToggleLabels => "toggleLabels",
            GameAction::ToggleInfo => "toggleInfo",
        }
    }
}
