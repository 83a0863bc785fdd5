//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and the renderer flushes that framebuffer to the terminal,
//! emitting only the cells that changed since the last frame.
//!
//! Goals:
//! - Keep `core` deterministic and free of presentation concerns
//! - Keep views pure so layout can be unit-tested without a terminal
//! - Own everything cosmetic: colours, tile names, key hints

pub mod catalog;
pub mod fb;
pub mod game_view;
pub mod info_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use catalog::{tile_name, tile_palette, TILE_NAMES};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardFrame, GameView, LabelMode, Viewport};
pub use info_view::InfoView;
pub use renderer::{encode_frame_into, TerminalRenderer};
