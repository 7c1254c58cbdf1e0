//! Terminal input module.
//!
//! Maps `crossterm` key events onto the engine's [`crate::types::GameAction`]s.
//! There is no auto-repeat logic here: the engine acts on each key press once
//! and the gravity timer lives in the driver.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
