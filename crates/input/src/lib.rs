//! Terminal input module (host-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. There is no
//! auto-repeat or key-release tracking here: each key press is one action,
//! which is all the game loop needs.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
