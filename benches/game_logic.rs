use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{Game, Grid, Randomizer, Shape, Tuning};
use gridfall::types::{InputFrame, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(Tuning::default(), 12345);
    let idle = InputFrame::idle();

    c.bench_function("game_tick_idle", |b| {
        b.iter(|| {
            game.tick(black_box(&idle));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let drop_frame = InputFrame {
        space: true,
        ..InputFrame::idle()
    };

    c.bench_function("game_tick_hard_drop", |b| {
        b.iter(|| {
            // Fresh game per iteration so the field never tops out.
            let mut game = Game::new(Tuning::default(), 12345);
            game.tick(black_box(&drop_frame));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for row in 0..4 {
                for col in 0..10 {
                    grid.set(col, row, Some(PieceKind::I));
                }
            }
            grid.clear_rows(black_box(&[0, 1, 2, 3]));
        })
    });
}

fn bench_deal(c: &mut Criterion) {
    let mut randomizer = Randomizer::new(12345);

    c.bench_function("deal_piece", |b| {
        b.iter(|| {
            black_box(randomizer.deal());
        })
    });
}

fn bench_projection(c: &mut Criterion) {
    let grid = Grid::new();
    let shape = Shape::new(PieceKind::T);

    c.bench_function("ghost_projection", |b| {
        b.iter(|| {
            black_box(shape.projection(black_box(&grid)));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop,
    bench_line_clear,
    bench_deal,
    bench_projection
);
criterion_main!(benches);
