use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{
    compute_move, Board, GameConfig, GameSnapshot, Grid, ScoreStore, Session, SimpleRng,
};
use tui_2048::term::{FrameBuffer, GameView, Viewport};
use tui_2048::types::{Direction, GameAction};

struct NullStore;

impl ScoreStore for NullStore {
    fn load(&self) -> u32 {
        0
    }

    fn save(&mut self, _best: u32) -> tui_2048::core::error::Result<()> {
        Ok(())
    }
}

fn busy_board() -> Board {
    Board::from_rows(&[[2, 2, 4, 8], [0, 4, 4, 16], [2, 0, 2, 2], [8, 8, 0, 4]]).expect("square board")
}

fn bench_compute_move(c: &mut Criterion) {
    let board = busy_board();
    c.bench_function("compute_move_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(compute_move(black_box(&board), dir));
            }
        })
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let grid = Grid::with_board(&GameConfig::default(), busy_board(), SimpleRng::new(1));
    c.bench_function("legal_moves", |b| b.iter(|| black_box(grid.legal_moves())));
}

fn bench_session_tick(c: &mut Criterion) {
    let mut session = Session::new(&GameConfig::default(), NullStore, SimpleRng::new(12345));
    let mut i = 0usize;

    c.bench_function("session_move_and_tick", |b| {
        b.iter(|| {
            if !session.is_busy() {
                i = i.wrapping_add(1);
                if session.is_game_over() {
                    session.tick();
                    session.apply_action(GameAction::Restart);
                } else {
                    session.apply_action(GameAction::Move(Direction::ALL[i % 4]));
                }
            }
            session.tick();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut session = Session::new(&GameConfig::default(), NullStore, SimpleRng::new(7));
    session.apply_action(GameAction::Move(Direction::Left));
    session.apply_action(GameAction::Move(Direction::Up));
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_frame_80x24", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            black_box(view.render_into(&snap, Viewport::new(80, 24), &mut fb));
        })
    });
}

criterion_group!(
    benches,
    bench_compute_move,
    bench_legal_moves,
    bench_session_tick,
    bench_render
);
criterion_main!(benches);
