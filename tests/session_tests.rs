//! Integration tests for a whole game session

use blockfall::core::{
    GameConfig, GameEvent, GameSession, LockOutcome, RandomSource, Shape, ShapeCatalog,
};
use blockfall::types::{Cell, Color, GameAction};

/// Cycles through a fixed list of values
struct Scripted {
    values: Vec<u32>,
    next: usize,
}

impl Scripted {
    fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

fn catalog_of(name: &str, bits: &[&[&[u8]]], color: Color) -> ShapeCatalog {
    let mut catalog = ShapeCatalog::new();
    catalog.register(Shape::from_bits(name, bits).unwrap(), color);
    catalog
}

fn o_only() -> ShapeCatalog {
    catalog_of("O", &[&[&[1, 1], &[1, 1]]], Color::Red)
}

fn filled(game: &GameSession<impl RandomSource>) -> Vec<(i32, i32)> {
    let board = game.board();
    let mut out = Vec::new();
    for y in 0..board.rows() as i32 {
        for x in 0..board.cols() as i32 {
            if board.is_occupied(x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn test_o_drops_stack_without_clearing() {
    let mut game = GameSession::new(GameConfig::with_size(6, 4), o_only()).unwrap();
    assert_eq!(game.active().x(), 1);

    game.apply_action(GameAction::MoveLeft);
    game.apply_action(GameAction::HardDrop);
    assert_eq!(filled(&game), vec![(0, 4), (1, 4), (0, 5), (1, 5)]);

    game.apply_action(GameAction::MoveLeft);
    game.apply_action(GameAction::HardDrop);
    assert_eq!(
        filled(&game),
        vec![(0, 2), (1, 2), (0, 3), (1, 3), (0, 4), (1, 4), (0, 5), (1, 5)]
    );
    assert_eq!(game.score(), 0);
    assert!(!game.game_over());

    let events: Vec<GameEvent> = game.drain_events().collect();
    assert_eq!(
        events,
        vec![
            GameEvent::PieceLocked { rows_cleared: 0 },
            GameEvent::PieceLocked { rows_cleared: 0 },
        ]
    );
}

#[test]
fn test_completing_two_rows_scores_twenty() {
    let mut game = GameSession::new(GameConfig::with_size(6, 4), o_only()).unwrap();
    for _ in 0..2 {
        game.apply_action(GameAction::MoveLeft);
        game.apply_action(GameAction::HardDrop);
    }
    game.drain_events().for_each(drop);

    game.apply_action(GameAction::MoveRight);
    game.apply_action(GameAction::HardDrop);

    assert_eq!(game.score(), 20);
    assert_eq!(filled(&game), vec![(0, 4), (1, 4), (0, 5), (1, 5)]);
    assert_eq!(
        game.take_last_lock(),
        Some(LockOutcome {
            rows_cleared: 2,
            topped_out: false
        })
    );
    let events: Vec<GameEvent> = game.drain_events().collect();
    assert_eq!(
        events,
        vec![
            GameEvent::PieceLocked { rows_cleared: 2 },
            GameEvent::ScoreChanged(20),
        ]
    );
}

#[test]
fn test_single_row_clear_scores_ten() {
    let dot = catalog_of("dot", &[&[&[1]]], Color::Blue);
    let mut game = GameSession::new(GameConfig::with_size(3, 2), dot).unwrap();
    assert_eq!((game.active().x(), game.active().y()), (0, -2));

    game.apply_action(GameAction::HardDrop);
    assert_eq!(game.board().get(0, 2), Some(Cell::Filled(Color::Blue)));

    game.apply_action(GameAction::MoveRight);
    game.apply_action(GameAction::HardDrop);

    assert_eq!(game.score(), 10);
    assert_eq!(game.board().filled_count(), 0);
    let events: Vec<GameEvent> = game.drain_events().collect();
    assert_eq!(
        events,
        vec![
            GameEvent::PieceLocked { rows_cleared: 0 },
            GameEvent::PieceLocked { rows_cleared: 1 },
            GameEvent::ScoreChanged(10),
        ]
    );
}

#[test]
fn test_stacking_to_the_top_ends_the_game_once() {
    let mut game = GameSession::new(GameConfig::with_size(6, 4), o_only()).unwrap();
    for _ in 0..3 {
        game.apply_action(GameAction::HardDrop);
        assert!(!game.game_over());
    }
    // Column pair 1-2 is now full; the fourth O can only lock above row 0.
    let before = game.board().clone();
    game.apply_action(GameAction::HardDrop);

    assert!(game.game_over());
    assert_eq!(game.piece_id(), 4);
    assert_eq!(game.board(), &before);
    assert!(game.take_last_lock().unwrap().topped_out);

    let events: Vec<GameEvent> = game.drain_events().collect();
    assert_eq!(events.last(), Some(&GameEvent::GameOver));
    assert_eq!(events.iter().filter(|e| **e == GameEvent::GameOver).count(), 1);

    for action in [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ] {
        assert!(!game.apply_action(action));
    }
    assert_eq!(game.drain_events().count(), 0);
    assert_eq!(game.board(), &before);
}

#[test]
fn test_same_seed_same_pieces() {
    let config = GameConfig {
        seed: 2024,
        ..GameConfig::default()
    };
    let mut a = GameSession::new(config, ShapeCatalog::standard()).unwrap();
    let mut b = GameSession::new(config, ShapeCatalog::standard()).unwrap();

    for _ in 0..12 {
        assert_eq!(a.active().shape().name(), b.active().shape().name());
        a.apply_action(GameAction::HardDrop);
        b.apply_action(GameAction::HardDrop);
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.game_over(), b.game_over());
}

#[test]
fn test_injected_random_source_picks_shapes() {
    // Standard catalog order: Z S T O L I J.
    let rng = Scripted::new(&[5, 3]);
    let mut game =
        GameSession::with_rng(GameConfig::default(), ShapeCatalog::standard(), rng).unwrap();

    assert_eq!(game.active().shape().name(), "I");
    assert_eq!(game.active().color(), Color::Cyan);
    game.apply_action(GameAction::HardDrop);
    assert_eq!(game.active().shape().name(), "O");
    game.apply_action(GameAction::HardDrop);
    assert_eq!(game.active().shape().name(), "I");
}

#[test]
fn test_gravity_steps_piece_after_interval() {
    let config = GameConfig {
        gravity_ms: 500,
        ..GameConfig::default()
    };
    let mut game = GameSession::new(config, ShapeCatalog::standard()).unwrap();
    game.start();
    let y0 = game.active().y();

    assert!(!game.tick(250));
    assert!(!game.tick(250));
    assert!(game.tick(1));
    assert_eq!(game.active().y(), y0 + 1);

    // Rotation restarts the interval.
    assert!(!game.tick(400));
    game.apply_action(GameAction::RotateCw);
    assert!(!game.tick(400));
    assert_eq!(game.active().y(), y0 + 1);
}

#[test]
fn test_gravity_alone_locks_pieces() {
    let mut game = GameSession::new(GameConfig::with_size(6, 4), o_only()).unwrap();
    game.start();
    let mut ticks = 0;
    while game.piece_id() == 1 {
        game.tick(1001);
        ticks += 1;
        assert!(ticks < 50);
    }
    // Six steps from y = -2 to the floor at y = 4, then one blocked step locks.
    assert_eq!(ticks, 7);
    assert_eq!(game.board().filled_count(), 4);
}

#[test]
fn test_restart_after_game_over() {
    let mut game = GameSession::new(GameConfig::with_size(6, 4), o_only()).unwrap();
    while !game.game_over() {
        game.apply_action(GameAction::HardDrop);
    }
    game.drain_events().for_each(drop);

    game.restart();
    assert!(!game.game_over());
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(game.piece_id(), 1);
    assert_eq!(game.score(), 0);
    assert!(game.apply_action(GameAction::HardDrop));
}

#[test]
fn test_bad_configuration_rejected_at_construction() {
    assert!(GameSession::new(GameConfig::with_size(0, 10), ShapeCatalog::standard()).is_err());
    assert!(GameSession::new(GameConfig::with_size(20, 0), ShapeCatalog::standard()).is_err());
    assert!(GameSession::new(GameConfig::default(), ShapeCatalog::new()).is_err());
    assert!(GameSession::new(GameConfig::with_size(20, 3), ShapeCatalog::standard()).is_err());
}

#[test]
fn test_snapshot_follows_session() {
    let mut game = GameSession::new(GameConfig::with_size(6, 4), o_only()).unwrap();
    game.apply_action(GameAction::HardDrop);
    let snap = game.snapshot();

    assert_eq!(snap.piece_id, 2);
    assert_eq!(snap.cell_at(1, 5), Cell::Filled(Color::Red));
    let active = snap.active.as_ref().unwrap();
    assert_eq!((active.x, active.y), (1, -2));
    assert_eq!(snap.ghost_y, Some(2));
}
