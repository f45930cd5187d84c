use criterion::{black_box, criterion_group, criterion_main, Criterion};
use falling_blocks::core::{BoardEngine, GameSnapshot, Grid, PieceFactory};
use falling_blocks::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut engine = BoardEngine::new(12345);

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine.reset();
            }
            engine.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, Some(PieceKind::I));
                }
            }
            grid.clear_full_rows()
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut factory = PieceFactory::new(12345);

    c.bench_function("factory_spawn", |b| b.iter(|| black_box(factory.spawn())));
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut engine = BoardEngine::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine.reset();
            }
            engine.hard_drop()
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut engine = BoardEngine::new(12345);

    c.bench_function("move_right_left", |b| {
        b.iter(|| {
            engine.move_right();
            engine.move_left();
        })
    });

    c.bench_function("rotate_clockwise", |b| {
        b.iter(|| engine.rotate_clockwise())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = BoardEngine::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| engine.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_hard_drop,
    bench_move_and_rotate,
    bench_snapshot
);
criterion_main!(benches);
