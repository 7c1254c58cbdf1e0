use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameConfig, GameSession, ShapeCatalog};
use blockfall::types::{Color, GameAction};

fn session() -> GameSession {
    let config = GameConfig {
        seed: 12345,
        ..GameConfig::default()
    };
    let mut game = GameSession::new(config, ShapeCatalog::standard()).unwrap();
    game.start();
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = session();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if game.game_over() {
                game.restart();
            }
            game.tick(black_box(16));
        })
    });
}

fn bench_row_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(20, 10).unwrap();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(x, y, Color::Cyan);
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut game = session();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if game.game_over() {
                game.restart();
            }
            game.apply_action(GameAction::HardDrop);
            game.drain_events().count()
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = session();

    c.bench_function("move_right", |b| {
        b.iter(|| {
            game.apply_action(black_box(GameAction::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = session();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.apply_action(black_box(GameAction::RotateCw));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_row_clear,
    bench_hard_drop,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
