//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::InputAction`]s and
//! pointer presses. Independent of how the grid is drawn.

pub mod map;

pub use rainbow_types as types;

pub use map::{handle_key_event, pointer_press, should_quit};
