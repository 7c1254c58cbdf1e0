//! Snapshot module - owned, read-only copy of a session for renderers

use arrayvec::ArrayVec;

use crate::piece::ActivePiece;
use crate::types::{Cell, Color, MAX_PIECE_CELLS};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub color: Color,
    pub orientation: usize,
    pub x: i32,
    pub y: i32,
    /// Board coordinates of the occupied sub-cells; may be above row 0
    pub cells: ArrayVec<(i32, i32), MAX_PIECE_CELLS>,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            color: value.color(),
            orientation: value.orientation(),
            x: value.x(),
            y: value.y(),
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major copy of the grid
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Bounding-box row the active piece would land at
    pub ghost_y: Option<i32>,
    pub score: u32,
    pub started: bool,
    pub game_over: bool,
    pub piece_id: u32,
}

impl GameSnapshot {
    /// Cell at column `x`, row `y`; vacant when out of range
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        if x >= self.cols || y >= self.rows {
            return Cell::Vacant;
        }
        self.board.get(y * self.cols + x).copied().unwrap_or_default()
    }

    /// Landing cells of the active piece, if any
    pub fn ghost_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let offset = match (&self.active, self.ghost_y) {
            (Some(active), Some(ghost_y)) => Some(ghost_y - active.y),
            _ => None,
        };
        self.active
            .iter()
            .flat_map(|active| active.cells.iter())
            .filter_map(move |&(x, y)| offset.map(|dy| (x, y + dy)))
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over
    }
}
