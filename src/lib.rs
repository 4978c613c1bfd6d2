//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blockfall::{core,engine,input,term,types}`
//! and holds the runner's configuration.

pub mod config;

pub use tui_blockfall_core as core;
pub use tui_blockfall_engine as engine;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
