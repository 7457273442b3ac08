use criterion::{black_box, criterion_group, criterion_main, Criterion};
use coop_tetris::bot::{analyze, make_plan};
use coop_tetris::core::{Grid, SimpleRng};
use coop_tetris::engine::{InputSnapshot, Session, SessionConfig};
use coop_tetris::types::Block;

fn bench_versus_tick(c: &mut Criterion) {
    let config = SessionConfig::versus().with_bots(&[0, 1, 2, 3]);
    let mut session = Session::new(&config, 12345, 0).unwrap();
    let input = InputSnapshot::idle();
    let mut now = 0;

    c.bench_function("versus_tick_16ms_bots", |b| {
        b.iter(|| {
            now += 16;
            if !session.is_running() {
                session = Session::new(&config, 12345, now).unwrap();
            }
            session.tick(black_box(now), &input);
            session.drain_events();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines_14_wide", |b| {
        b.iter(|| {
            let mut grid = Grid::new(14, 20);
            for y in 16..20 {
                for x in 0..14 {
                    grid.set(x, y, Some(Block::garbage()));
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_bot_plan(c: &mut Criterion) {
    let config = SessionConfig::coop(vec![0, 1, 2, 3]).with_bots(&[0, 1, 2, 3]);
    let mut session = Session::new(&config, 7, 0).unwrap();
    {
        let grid = session.board_mut(0).unwrap().grid_mut();
        for y in 14..20 {
            for x in 0..22 {
                if (x + y) % 5 != 0 {
                    grid.set(x, y, Some(Block::garbage()));
                }
            }
        }
    }
    let players = session.players().clone();
    let mut board = session.board(0).unwrap().clone();
    let mut rng = SimpleRng::new(7);

    c.bench_function("bot_plan_22_wide", |b| {
        b.iter(|| black_box(make_plan(&mut board, &players, 0, 0, &mut rng)))
    });

    c.bench_function("grid_metrics_22_wide", |b| {
        b.iter(|| black_box(analyze(board.grid())))
    });
}

criterion_group!(benches, bench_versus_tick, bench_line_clear, bench_bot_plan);
criterion_main!(benches);
