//! Host-side drivers for the game engine.
//!
//! The core engine is synchronous and single-owner. This crate wraps it for
//! hosts that want the engine behind a shared handle and gravity driven by a
//! tokio task instead of a frame loop:
//!
//! - [`SharedGame`]: one mutex around the whole engine
//! - [`Ticker`]: async task that ticks on the engine's current fall interval
//!
//! ```no_run
//! use tui_blockfall_core::Game;
//! use tui_blockfall_engine::{SharedGame, Ticker};
//! use tui_blockfall_types::GameCommand;
//!
//! # async fn demo() {
//! let shared = SharedGame::new(Game::new(42));
//! let ticker = Ticker::spawn(shared.clone());
//! shared.apply(GameCommand::Start);
//! // ... feed input ...
//! ticker.stop();
//! # }
//! ```

pub mod shared;
pub mod ticker;

pub use tui_blockfall_types as types;

pub use shared::SharedGame;
pub use ticker::Ticker;
