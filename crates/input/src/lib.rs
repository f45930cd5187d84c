//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] intents. Each
//! key press produces at most one intent; there is no auto-repeat handling.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{handle_key_event, should_quit};
