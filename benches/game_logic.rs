use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{drop_distance, fits, Board, Game, GameSnapshot, Piece};
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};
use tui_blockfall::types::ShapeKind;

fn bench_advance(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.reset();
                game.start();
            }
            game.advance(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, ShapeKind::I);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_validator(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 10..20 {
        board.fill_row(y, ShapeKind::Z);
        board.set((y % 10) as i8, y as i8, None);
    }
    let piece = Piece::new(ShapeKind::T);

    c.bench_function("fits", |b| b.iter(|| fits(black_box(&piece), &board)));
    c.bench_function("drop_distance", |b| {
        b.iter(|| drop_distance(black_box(&piece), &board))
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_until_game_over", |b| {
        b.iter(|| {
            let mut game = Game::new(black_box(7));
            game.start();
            while game.hard_drop() {}
            game.score()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();
    let snap = game.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_validator,
    bench_hard_drop_game,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
