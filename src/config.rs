//! Runtime configuration from environment variables.
//!
//! - `TILES_ROWS` / `TILES_COLS`: grid size (default 4 x 4, accepted 2..=16)
//! - `TILES_SAVE_PATH`: save file (default `tui-2048-save.json`)
//! - `TILES_SAVE_DISABLED`: "1" or "true" keeps saves in memory only
//! - `TILES_SEED`: fixed seed for tile spawns
//! - `TILES_LOG_PATH`: append logs to this file (no logging otherwise)

use std::path::PathBuf;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION, MIN_DIMENSION};

pub const DEFAULT_SAVE_PATH: &str = "tui-2048-save.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    /// `None` when saving to disk is disabled.
    pub save_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            save_path: Some(PathBuf::from(DEFAULT_SAVE_PATH)),
            seed: None,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let dimension = |key: &str, default: usize| {
            non_empty(key)
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|n| (MIN_DIMENSION..=MAX_DIMENSION).contains(n))
                .unwrap_or(default)
        };

        let save_disabled = non_empty("TILES_SAVE_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let save_path = if save_disabled {
            None
        } else {
            Some(
                non_empty("TILES_SAVE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH)),
            )
        };

        Self {
            rows: dimension("TILES_ROWS", DEFAULT_ROWS),
            cols: dimension("TILES_COLS", DEFAULT_COLS),
            save_path,
            seed: non_empty("TILES_SEED").and_then(|s| s.parse().ok()),
            log_path: non_empty("TILES_LOG_PATH").map(PathBuf::from),
        }
    }
}
