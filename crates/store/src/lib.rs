//! Persistence module - key-value storage around game snapshots
//!
//! The core never touches storage. This crate supplies the storage backend
//! the host uses to park a game (when switching to the info view, or between
//! runs) and bring it back.
//!
//! # Layout
//!
//! A game occupies two keys:
//!
//! - `board`: the grid as JSON nested arrays, e.g. `[[2,0],[0,4]]`
//! - `score`: the score as a decimal string
//!
//! # Backends
//!
//! - [`MemoryStore`]: `HashMap`-backed, for tests and `TILES_SAVE_DISABLED`
//! - [`FileStore`]: a JSON object file, rewritten on every `set`
//!
//! # Loading
//!
//! [`load_game`] never fails: a missing game starts fresh, and an unreadable
//! or invalid one is logged and replaced by a new game.

pub mod file;
pub mod game;
pub mod memory;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use file::FileStore;
pub use game::{load_game, load_snapshot, save_game, LoadOutcome, BOARD_KEY, SCORE_KEY};
pub use memory::MemoryStore;

use anyhow::Result;

/// String key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Write several entries at once.
    ///
    /// Backends that can fail part way override this so that either every
    /// entry is stored or none is.
    fn set_all(&mut self, entries: Vec<(&str, String)>) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }

    fn set_all(&mut self, entries: Vec<(&str, String)>) -> Result<()> {
        (**self).set_all(entries)
    }
}
