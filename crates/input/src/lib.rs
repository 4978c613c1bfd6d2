//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameCommand`]. Every key
//! press is one command; there is no key repeat handling beyond what the
//! terminal itself delivers.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
