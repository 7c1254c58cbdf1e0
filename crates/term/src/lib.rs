//! Terminal rendering for the falling-block game.
//!
//! The core exposes a read-only [`GameSnapshot`](crate::core::GameSnapshot);
//! [`GameView`] turns it into a [`FrameBuffer`] and [`TerminalRenderer`]
//! flushes that to the terminal. Nothing here feeds back into the game.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
