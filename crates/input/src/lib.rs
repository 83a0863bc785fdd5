//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The binding
//! table is presentation policy; the core only ever sees directions.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, is_back_key, should_quit};
