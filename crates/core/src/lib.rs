//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules and the state machine of a falling-block
//! puzzle game. It has **no dependencies** on terminals or I/O: the host
//! feeds it commands and elapsed time, and reads snapshots back. State
//! changes are reported as `tracing` events; with no subscriber installed
//! they cost nothing.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 well with occupancy queries, merging and line clearing
//! - [`piece`]: the seven shape matrices, clockwise rotation, spawn position
//! - [`validator`]: placement checks against walls, floor and locked cells
//! - [`rng`]: seeded uniform randomizer and scripted piece sequences
//! - [`scoring`]: points, level progression and fall speed
//! - [`clock`]: the gravity schedule
//! - [`game`]: the engine state machine
//! - [`snapshot`]: copyable read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn horizontally centred at the top row.
//! - Rotation is clockwise about the top-left anchor, with no wall kicks.
//! - A piece that cannot fall locks on the next gravity step.
//! - Soft drop scores 1 per row and hard drop scores 2 per row.
//! - Clearing `n` rows scores `n * 100 * level`.
//! - Every 10 lines raises the level; gravity speeds up by 50ms per level
//!   down to 100ms.
//! - The game ends when a freshly spawned piece overlaps the stack.
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::Game;
//! use tui_blockfall_types::GameCommand;
//!
//! let mut game = Game::new(12345);
//! game.start();
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::Rotate);
//! game.apply(GameCommand::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Gravity is driven by [`Game::advance`] with elapsed host milliseconds, or
//! by calling [`Game::tick`] directly on the period from
//! [`Game::tick_interval`].

pub mod board;
pub mod clock;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod validator;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, Grid};
pub use clock::FallClock;
pub use game::Game;
pub use piece::{Piece, ShapeMatrix};
pub use rng::{PieceSource, SimpleRng};
pub use scoring::{drop_score, fall_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use validator::{drop_distance, fits, is_valid_placement};
