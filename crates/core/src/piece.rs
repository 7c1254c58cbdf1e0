//! Piece module - the falling piece and every movement rule
//!
//! An [`ActivePiece`] knows its shape, orientation and position and checks each
//! move against a [`Board`]. Rejected moves leave the piece untouched. A piece
//! that cannot descend locks: its cells are written into the board, full rows
//! collapse, and the piece becomes inert. Spawning the replacement is the
//! session's job.
//!
//! Collision rules for a candidate sub-cell at (nx, ny):
//! - outside `0..cols` horizontally, or at/below `rows`: blocked
//! - above the board (`ny < 0`): always free
//! - otherwise blocked iff the board cell is filled

use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::shapes::{CatalogEntry, Shape};
use crate::types::{Color, MAX_PIECE_CELLS, SCORE_PER_ROW};

/// Result of locking a piece into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    /// Full rows removed after the piece was written
    pub rows_cleared: usize,
    /// A sub-cell settled above row 0; the game is over
    pub topped_out: bool,
}

impl LockOutcome {
    /// Points this lock is worth (flat per row)
    pub fn score(&self) -> u32 {
        self.rows_cleared as u32 * SCORE_PER_ROW
    }
}

/// Result of a single downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The piece moved down one row
    Moved,
    /// The piece was blocked and locked in place
    Locked(LockOutcome),
    /// The piece was already locked; nothing happened
    Inert,
}

/// The piece currently under player control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    shape: Arc<Shape>,
    color: Color,
    orientation: usize,
    x: i32,
    y: i32,
    locked: bool,
}

impl ActivePiece {
    /// Create a piece in its first orientation with its bounding box at (x, y)
    pub fn new(shape: Arc<Shape>, color: Color, x: i32, y: i32) -> Self {
        Self {
            shape,
            color,
            orientation: 0,
            x,
            y,
            locked: false,
        }
    }

    /// Create a piece horizontally centered on a board `cols` wide
    pub fn spawn(entry: &CatalogEntry, cols: usize, spawn_y: i32) -> Self {
        let x = (cols as i32 - entry.shape.side() as i32) / 2;
        Self::new(Arc::clone(&entry.shape), entry.color, x, spawn_y)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn orientation(&self) -> usize {
        self.orientation
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Board coordinates of every occupied sub-cell, top row first
    ///
    /// Rows above the board come out negative.
    pub fn cells(&self) -> ArrayVec<(i32, i32), MAX_PIECE_CELLS> {
        self.shape
            .orientation(self.orientation)
            .cells()
            .iter()
            .map(|&(c, r)| (self.x + c, self.y + r))
            .collect()
    }

    /// Would the piece overlap something if offset by (dx, dy) in `orientation`?
    pub fn collides(&self, board: &Board, dx: i32, dy: i32, orientation: usize) -> bool {
        let cols = board.cols() as i32;
        let rows = board.rows() as i32;

        self.shape
            .orientation(orientation)
            .cells()
            .iter()
            .any(|&(c, r)| {
                let nx = self.x + c + dx;
                let ny = self.y + r + dy;
                if nx < 0 || nx >= cols || ny >= rows {
                    return true;
                }
                ny >= 0 && !board.is_vacant(nx, ny)
            })
    }

    /// True if the piece fits where it is
    pub fn fits(&self, board: &Board) -> bool {
        !self.collides(board, 0, 0, self.orientation)
    }

    /// Step down one row, or lock if the way is blocked
    pub fn move_down(&mut self, board: &mut Board) -> Descent {
        if self.locked {
            return Descent::Inert;
        }
        if self.collides(board, 0, 1, self.orientation) {
            return Descent::Locked(self.lock(board));
        }
        self.y += 1;
        Descent::Moved
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        self.shift(board, -1)
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        self.shift(board, 1)
    }

    fn shift(&mut self, board: &Board, dx: i32) -> bool {
        if self.locked || self.collides(board, dx, 0, self.orientation) {
            return false;
        }
        self.x += dx;
        true
    }

    /// Keep stepping down until the piece locks
    ///
    /// Returns `None` if the piece was already locked.
    pub fn hard_drop(&mut self, board: &mut Board) -> Option<LockOutcome> {
        loop {
            match self.move_down(board) {
                Descent::Moved => {}
                Descent::Locked(outcome) => return Some(outcome),
                Descent::Inert => return None,
            }
        }
    }

    /// Advance to the next orientation, with a single one-column wall kick
    ///
    /// If the plain rotation is blocked, one horizontal nudge is tried: left
    /// when the piece sits in the right half of the board, right otherwise.
    /// If that is blocked too the rotation is rejected.
    pub fn rotate(&mut self, board: &Board) -> bool {
        if self.locked {
            return false;
        }

        let next = (self.orientation + 1) % self.shape.orientation_count();
        let kick = if !self.collides(board, 0, 0, next) {
            0
        } else if 2 * self.x > board.cols() as i32 {
            -1
        } else {
            1
        };

        if kick != 0 && self.collides(board, kick, 0, next) {
            return false;
        }

        self.x += kick;
        self.orientation = next;
        true
    }

    /// Write the piece into the board and collapse full rows
    ///
    /// A sub-cell above row 0 means the piece never fully entered the board:
    /// writing stops there, no rows are cleared and the outcome is topped out.
    pub fn lock(&mut self, board: &mut Board) -> LockOutcome {
        if self.locked {
            return LockOutcome::default();
        }
        self.locked = true;

        for &(c, r) in self.shape.orientation(self.orientation).cells() {
            let (bx, by) = (self.x + c, self.y + r);
            if by < 0 {
                return LockOutcome {
                    rows_cleared: 0,
                    topped_out: true,
                };
            }
            board.set_cell(bx, by, self.color);
        }

        LockOutcome {
            rows_cleared: board.clear_full_rows(),
            topped_out: false,
        }
    }

    /// Row the piece's bounding box would settle at if dropped now
    pub fn ghost_y(&self, board: &Board) -> i32 {
        let mut dy = 0;
        while !self.collides(board, 0, dy + 1, self.orientation) {
            dy += 1;
        }
        self.y + dy
    }
}
