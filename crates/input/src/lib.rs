//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::TurnAction`]s. The game has
//! no clock, so every key press maps to at most one action and there is no
//! repeat handling beyond what the terminal already does.

pub mod map;

pub use blokus_types as types;

pub use map::{handle_key_event, piece_slot, should_quit};
