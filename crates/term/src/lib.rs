//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw a [`GameSnapshot`]
//! into a framebuffer of styled cells, and the renderer diffs frames and
//! flushes only what changed.
//!
//! - Keeps `core` deterministic and free of I/O
//! - Board cells are 2 chars wide by default to offset glyph aspect ratio
//!
//! [`GameSnapshot`]: tui_blockfall_core::GameSnapshot

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, MAX_CELL_SIZE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
