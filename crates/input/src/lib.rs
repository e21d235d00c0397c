//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. It carries
//! no rule logic: the engine decides what a move means.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
