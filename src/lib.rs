//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the pieces that
//! tie them together: runtime [`config`] and the terminal [`app`].

pub mod app;
pub mod config;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_store as store;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
