//! Session module - one game in progress
//!
//! A [`GameSession`] owns the board, the active piece, the score and the random
//! source, and is the only thing drivers talk to. Input handlers and the gravity
//! timer both funnel into [`GameSession::apply_action`], so moves are applied in
//! exactly the order they are dispatched.
//!
//! Collaborators learn about changes through [`GameEvent`]s drained after each
//! call, or by reading the accessors / [`GameSession::snapshot`].

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::gravity::GravityClock;
use crate::piece::{ActivePiece, Descent, LockOutcome};
use crate::rng::{RandomSource, SimpleRng};
use crate::shapes::ShapeCatalog;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::GameAction;

/// Notifications for display collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The active piece locked into the board
    PieceLocked { rows_cleared: usize },
    /// The score changed; carries the new total
    ScoreChanged(u32),
    /// The game ended. Emitted once per game.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    config: GameConfig,
    catalog: ShapeCatalog,
    board: Board,
    active: ActivePiece,
    rng: R,
    gravity: GravityClock,
    score: u32,
    game_over: bool,
    started: bool,
    /// Monotonic count of pieces spawned this game (the first piece is 1).
    piece_id: u32,
    events: Vec<GameEvent>,
    last_lock: Option<LockOutcome>,
}

impl GameSession<SimpleRng> {
    /// Create a new game seeded from `config.seed`
    pub fn new(config: GameConfig, catalog: ShapeCatalog) -> Result<Self, ConfigError> {
        let rng = SimpleRng::new(config.seed);
        Self::with_rng(config, catalog, rng)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a new game drawing pieces from `rng`
    pub fn with_rng(
        config: GameConfig,
        catalog: ShapeCatalog,
        rng: R,
    ) -> Result<Self, ConfigError> {
        let board = Board::new(config.rows, config.cols)?;
        Self::with_board(config, catalog, rng, board)
    }

    /// Create a game that starts from an existing position
    ///
    /// The board must have the configured size. The first piece spawns as usual
    /// and the game is over at once if it does not fit.
    pub fn with_board(
        config: GameConfig,
        catalog: ShapeCatalog,
        mut rng: R,
        board: Board,
    ) -> Result<Self, ConfigError> {
        config.validate_with(&catalog)?;
        if board.rows() != config.rows || board.cols() != config.cols {
            return Err(ConfigError::BoardMismatch {
                rows: board.rows(),
                cols: board.cols(),
            });
        }
        let active = catalog
            .pick(&mut rng)
            .map(|entry| ActivePiece::spawn(entry, config.cols, config.spawn_y))
            .ok_or(ConfigError::EmptyCatalog)?;

        let mut session = Self {
            config,
            catalog,
            board,
            active,
            rng,
            gravity: GravityClock::new(config.gravity_ms),
            score: 0,
            game_over: false,
            started: false,
            piece_id: 1,
            events: Vec::new(),
            last_lock: None,
        };
        if !session.active.fits(&session.board) {
            session.end_game();
        }
        Ok(session)
    }

    /// Enable gravity; actions are accepted before this too
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.gravity.reset();
    }

    /// Throw the current game away and begin a new one with the same settings
    ///
    /// The random source carries on, so the next game gets fresh pieces.
    pub fn restart(&mut self) {
        self.board.clear();
        self.game_over = false;
        self.last_lock = None;
        self.piece_id = 0;
        self.gravity.reset();
        if self.score != 0 {
            self.score = 0;
            self.events.push(GameEvent::ScoreChanged(0));
        }
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn gravity(&self) -> &GravityClock {
        &self.gravity
    }

    /// Apply one logical command
    ///
    /// Returns true if the state changed. Everything is ignored after game over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        if action.resets_gravity() {
            self.gravity.reset();
        }

        match action {
            GameAction::MoveLeft => self.active.move_left(&self.board),
            GameAction::MoveRight => self.active.move_right(&self.board),
            GameAction::RotateCw => self.active.rotate(&self.board),
            GameAction::SoftDrop | GameAction::Gravity => self.move_down(),
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    /// Advance the gravity clock by `elapsed_ms`
    ///
    /// Returns true if the piece was stepped down (or locked). Nothing happens
    /// before [`start`](Self::start) or once the game is over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        if !self.gravity.advance(elapsed_ms) {
            return false;
        }
        self.apply_action(GameAction::Gravity)
    }

    /// Take pending notifications, oldest first
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Take and clear the result of the most recent lock
    pub fn take_last_lock(&mut self) -> Option<LockOutcome> {
        self.last_lock.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());

        let live = !self.active.is_locked();
        out.active = live.then(|| ActiveSnapshot::from(&self.active));
        out.ghost_y = (live && !self.game_over).then(|| self.active.ghost_y(&self.board));
        out.score = self.score;
        out.started = self.started;
        out.game_over = self.game_over;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn move_down(&mut self) -> bool {
        match self.active.move_down(&mut self.board) {
            Descent::Moved => true,
            Descent::Locked(outcome) => {
                self.settle(outcome);
                true
            }
            Descent::Inert => false,
        }
    }

    fn hard_drop(&mut self) -> bool {
        match self.active.hard_drop(&mut self.board) {
            Some(outcome) => {
                self.settle(outcome);
                true
            }
            None => false,
        }
    }

    /// Bookkeeping after the active piece locks
    fn settle(&mut self, outcome: LockOutcome) {
        self.last_lock = Some(outcome);
        self.events.push(GameEvent::PieceLocked {
            rows_cleared: outcome.rows_cleared,
        });

        if outcome.topped_out {
            self.end_game();
            return;
        }

        let points = outcome.score();
        if points > 0 {
            self.score = self.score.saturating_add(points);
            self.events.push(GameEvent::ScoreChanged(self.score));
        }

        self.spawn_piece();
    }

    /// Replace the active piece with a random one from the catalog
    ///
    /// A new piece that overlaps the stack where it spawns ends the game.
    fn spawn_piece(&mut self) {
        let Some(entry) = self.catalog.pick(&mut self.rng) else {
            self.end_game();
            return;
        };
        self.active = ActivePiece::spawn(entry, self.config.cols, self.config.spawn_y);
        self.piece_id = self.piece_id.wrapping_add(1);

        if !self.active.fits(&self.board) {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.events.push(GameEvent::GameOver);
    }
}
