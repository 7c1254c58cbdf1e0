//! Game configuration and construction-time validation
//!
//! Grid size is the only rule a game may vary. Everything is checked once,
//! when a session is built, so gameplay never has to handle a malformed setup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shapes::ShapeCatalog;
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SPAWN_Y, GRAVITY_MS};

/// Largest accepted row or column count
pub const MAX_DIMENSION: usize = 1024;

/// Construction-time configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroRows,
    ZeroCols,
    DimensionTooLarge { rows: usize, cols: usize },
    ZeroGravity,
    EmptyCatalog,
    ShapeTooWide { side: usize, cols: usize },
    /// A starting board whose size differs from the configured one
    BoardMismatch { rows: usize, cols: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroRows => write!(f, "board must have at least one row"),
            ConfigError::ZeroCols => write!(f, "board must have at least one column"),
            ConfigError::DimensionTooLarge { rows, cols } => write!(
                f,
                "board {}x{} exceeds the {} cell limit per side",
                rows, cols, MAX_DIMENSION
            ),
            ConfigError::ZeroGravity => write!(f, "gravity interval must be positive"),
            ConfigError::EmptyCatalog => write!(f, "shape catalog is empty"),
            ConfigError::ShapeTooWide { side, cols } => write!(
                f,
                "shape of side {} does not fit a board {} columns wide",
                side, cols
            ),
            ConfigError::BoardMismatch { rows, cols } => write!(
                f,
                "starting board size {}x{} does not match the configuration",
                rows, cols
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings fixed for the lifetime of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Automatic descent interval
    pub gravity_ms: u32,
    /// Row the bounding box of a new piece starts at
    pub spawn_y: i32,
    /// Seed for the default random source
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            gravity_ms: GRAVITY_MS,
            spawn_y: DEFAULT_SPAWN_Y,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Check the configuration on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::DimensionTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.gravity_ms == 0 {
            return Err(ConfigError::ZeroGravity);
        }
        Ok(())
    }

    /// Check the configuration together with the shapes it will play with
    pub fn validate_with(&self, catalog: &ShapeCatalog) -> Result<(), ConfigError> {
        self.validate()?;
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let side = catalog.max_side();
        if side > self.cols {
            return Err(ConfigError::ShapeTooWide {
                side,
                cols: self.cols,
            });
        }
        Ok(())
    }
}
