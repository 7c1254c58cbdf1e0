//! Shared types and constants for the falling-block game.
//!
//! Everything in here is plain data with no dependencies, so the core engine,
//! the input mapping and the terminal view can all agree on the same vocabulary.
//!
//! # Board Dimensions
//!
//! The playfield is `rows x cols`, fixed when a game starts:
//!
//! - **Rows**: 20 by default (row 0 is the top)
//! - **Cols**: 10 by default (column 0 is the left edge)
//! - **Spawn row**: -2, so pieces enter from above the visible grid
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver frame interval (~60 FPS) |
//! | `GRAVITY_MS` | 1000 | Automatic descent interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Color, GameAction, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let cell = Cell::Filled(Color::Red);
//! assert!(!cell.is_vacant());
//! assert_eq!(cell.color(), Some(Color::Red));
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(DEFAULT_ROWS, 20);
//! assert_eq!(DEFAULT_COLS, 10);
//! ```

/// Default number of rows (20)
pub const DEFAULT_ROWS: usize = 20;

/// Default number of columns (10)
pub const DEFAULT_COLS: usize = 10;

/// Row offset new pieces spawn at (above the visible grid)
pub const DEFAULT_SPAWN_Y: i32 = -2;

/// Points awarded for each cleared row (no multi-line bonus)
pub const SCORE_PER_ROW: u32 = 10;

/// Automatic descent interval in milliseconds
pub const GRAVITY_MS: u32 = 1000;

/// Driver frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Largest side length of a shape orientation matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// Upper bound on occupied sub-cells of one orientation
pub const MAX_PIECE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Fill colors a cell can hold
///
/// The palette is closed; renderers map each variant to their own display
/// value (see [`Color::rgb`] for the reference palette).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    Orange,
}

impl Color {
    /// All palette entries in declaration order
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::Orange,
    ];

    /// Reference display value as `(r, g, b)`
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Color;
    ///
    /// assert_eq!(Color::Red.rgb(), (229, 62, 62));
    /// ```
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (28, 120, 192),
            Color::Red => (229, 62, 62),
            Color::Green => (47, 133, 90),
            Color::Yellow => (246, 224, 94),
            Color::Blue => (44, 82, 130),
            Color::Purple => (184, 50, 128),
            Color::Cyan => (163, 191, 250),
            Color::Orange => (237, 137, 54),
        }
    }

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "purple" => Some(Color::Purple),
            "cyan" => Some(Color::Cyan),
            "orange" => Some(Color::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
            Color::Orange => "orange",
        }
    }
}

/// Display value of a vacant cell
pub const VACANT_RGB: (u8, u8, u8) = (198, 222, 221);

/// Display value of the grid lines / background
pub const BACKGROUND_RGB: (u8, u8, u8) = (1, 22, 39);

/// State of one board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Vacant,
    Filled(Color),
}

impl Cell {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Cell::Vacant)
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Vacant => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// Logical commands the engine understands
///
/// Input collaborators translate keys, gestures and timers into these.
/// `Gravity` is what the periodic timer sends; it behaves exactly like
/// `SoftDrop` but does not count as a player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if blocked
    SoftDrop,
    /// Drop piece until it locks
    HardDrop,
    /// Rotate piece to its next orientation
    RotateCw,
    /// Timer-driven single step down
    Gravity,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "gravity" => Some(GameAction::Gravity),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::Gravity => "gravity",
        }
    }

    /// Whether this action restarts the gravity countdown
    pub fn resets_gravity(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::RotateCw
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        assert_eq!(DEFAULT_ROWS, 20);
        assert_eq!(DEFAULT_COLS, 10);
        assert_eq!(SCORE_PER_ROW, 10);
        assert_eq!(GRAVITY_MS, 1000);
        assert_eq!(DEFAULT_SPAWN_Y, -2);
    }

    #[test]
    fn cell_defaults_to_vacant() {
        assert_eq!(Cell::default(), Cell::Vacant);
        assert!(Cell::default().is_vacant());
        assert_eq!(Cell::Vacant.color(), None);
    }

    #[test]
    fn color_names_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_str(color.as_str()), Some(color));
        }
        assert_eq!(Color::from_str("PURPLE"), Some(Color::Purple));
        assert_eq!(Color::from_str("vacant"), None);
    }

    #[test]
    fn only_lateral_moves_and_rotation_reset_gravity() {
        assert!(GameAction::MoveLeft.resets_gravity());
        assert!(GameAction::MoveRight.resets_gravity());
        assert!(GameAction::RotateCw.resets_gravity());
        assert!(!GameAction::SoftDrop.resets_gravity());
        assert!(!GameAction::HardDrop.resets_gravity());
        assert!(!GameAction::Gravity.resets_gravity());
    }
}
