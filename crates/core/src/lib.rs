//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block game: what counts as a
//! legal move, when a piece settles, how full rows collapse and how the score
//! grows. It has **no dependencies** on UI, terminal or timers; drivers feed it
//! [`GameAction`](types::GameAction)s and elapsed milliseconds.
//!
//! # Module Structure
//!
//! - [`board`]: fixed `rows x cols` grid with row-clear collapse
//! - [`shapes`]: orientation matrices and the shape+color catalog
//! - [`piece`]: the falling piece, collision, movement, wall kick and locking
//! - [`rng`]: seedable random source used to pick the next shape
//! - [`gravity`]: countdown that drives automatic descent
//! - [`config`]: game configuration and construction-time validation
//! - [`session`]: one game in progress, tying the pieces together
//! - [`snapshot`]: owned read-only copy of the state for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameSession, ShapeCatalog};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameSession::new(GameConfig::default(), ShapeCatalog::standard()).unwrap();
//! game.start();
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod config;
pub mod gravity;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use gravity::GravityClock;
pub use piece::{ActivePiece, Descent, LockOutcome};
pub use rng::{RandomSource, SimpleRng};
pub use session::{GameEvent, GameSession};
pub use shapes::{CatalogEntry, Orientation, Shape, ShapeCatalog, ShapeError};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
