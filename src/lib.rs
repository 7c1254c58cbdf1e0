//! Falling-block puzzle game (workspace facade crate).
//!
//! The rules live in `blockfall-core`; this package re-exports the member
//! crates as `blockfall::{core,input,term,types}` and carries the terminal
//! binary and its command-line parsing.

pub mod cli;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
