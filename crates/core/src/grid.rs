//! Grid engine - board, score and the transient animation collections
//!
//! The grid owns all mutable game-board state. Moves are computed by
//! [`compute_move`], a pure function over a board snapshot; the live grid only
//! applies its result. Speculative "could this move do anything" checks run the
//! same function on a clone and discard it.

use arrayvec::ArrayVec;

use crate::anim::{Particle, SlideAnimation, SpawnAnimation};
use crate::board::{cell_from_canonical, compact_row, Board};
use crate::config::{AnimationConfig, GameConfig, GridConfig, Layout, ParticleConfig};
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{CellPos, Direction, Rgb};

/// A tile moving to a new cell during a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideEvent {
    pub from: CellPos,
    pub to: CellPos,
    /// Value at the destination after the move.
    pub value: u32,
    pub merged: bool,
}

/// Two tiles combined at `cell` into `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEvent {
    pub cell: CellPos,
    pub value: u32,
}

/// Everything a single move attempt produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved: bool,
    pub score_delta: u32,
    pub merges: Vec<MergeEvent>,
    pub slides: Vec<SlideEvent>,
}

/// Compute the board after moving in `dir`, without touching `board`.
pub fn compute_move(board: &Board, dir: Direction) -> (Board, MoveOutcome) {
    let n = board.size();
    let canonical = board.to_canonical(dir);
    let mut next = Board::new(n);
    let mut outcome = MoveOutcome::default();

    for r in 0..n {
        let original = canonical.row(r);
        let compacted = compact_row(original);
        let values = compacted.values(n);
        if values.as_slice() != original {
            outcome.moved = true;
        }
        outcome.score_delta += compacted.score;

        for (j, tile) in compacted.tiles.iter().enumerate() {
            next.set(CellPos::new(r, j), tile.value);
            let to = cell_from_canonical(dir, CellPos::new(r, j), n);
            let from = |col: usize| cell_from_canonical(dir, CellPos::new(r, col), n);

            match tile.merged_with {
                Some(second) => {
                    outcome.merges.push(MergeEvent {
                        cell: to,
                        value: tile.value,
                    });
                    for col in [tile.source, second] {
                        outcome.slides.push(SlideEvent {
                            from: from(col),
                            to,
                            value: tile.value,
                            merged: true,
                        });
                    }
                }
                None if tile.source != j => outcome.slides.push(SlideEvent {
                    from: from(tile.source),
                    to,
                    value: tile.value,
                    merged: false,
                }),
                None => {}
            }
        }
    }

    (next.from_canonical(dir), outcome)
}

/// The game board plus everything that animates on it.
#[derive(Debug, Clone)]
pub struct Grid<R: RandomSource = SimpleRng> {
    board: Board,
    score: u32,
    slides: Vec<SlideAnimation>,
    spawns: Vec<SpawnAnimation>,
    particles: Vec<Particle>,
    rng: R,
    rules: GridConfig,
    animation: AnimationConfig,
    particle_cfg: ParticleConfig,
    layout: Layout,
}

impl<R: RandomSource> Grid<R> {
    /// Empty grid sized and tuned from `config`.
    pub fn new(config: &GameConfig, rng: R) -> Self {
        Self {
            board: Board::new(config.grid.size),
            score: 0,
            slides: Vec::new(),
            spawns: Vec::new(),
            particles: Vec::new(),
            rng,
            rules: config.grid,
            animation: config.animation,
            particle_cfg: config.particles,
            layout: config.layout,
        }
    }

    /// Grid starting from a given board (tests, replays).
    pub fn with_board(config: &GameConfig, board: Board, rng: R) -> Self {
        let mut grid = Self::new(config, rng);
        grid.board = board;
        grid
    }

    /// Fresh game: empty board, zero score, no animations, starting tiles.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.slides.clear();
        self.spawns.clear();
        self.particles.clear();
        for _ in 0..self.rules.start_tiles {
            self.spawn_tile();
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn slides(&self) -> &[SlideAnimation] {
        &self.slides
    }

    pub fn spawns(&self) -> &[SpawnAnimation] {
        &self.spawns
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Slide or spawn animations still running (particles don't count).
    pub fn is_animating(&self) -> bool {
        !self.slides.is_empty() || !self.spawns.is_empty()
    }

    /// Move every tile in `dir`. Leaves the grid untouched when nothing moves.
    pub fn move_tiles(&mut self, dir: Direction) -> MoveOutcome {
        let (next, outcome) = compute_move(&self.board, dir);
        if !outcome.moved {
            return outcome;
        }

        self.board = next;
        self.score += outcome.score_delta;
        self.slides = outcome
            .slides
            .iter()
            .map(|s| SlideAnimation::new(s.from, s.to, s.value, s.merged))
            .collect();

        log::debug!(
            "move {}: +{} ({} merges, {} slides)",
            dir.as_str(),
            outcome.score_delta,
            outcome.merges.len(),
            outcome.slides.len()
        );
        outcome
    }

    /// Whether a move in `dir` would change the board. Runs on a scratch copy.
    pub fn would_move(&self, dir: Direction) -> bool {
        let scratch = self.board.clone();
        compute_move(&scratch, dir).1.moved
    }

    /// Directions that would change the board.
    pub fn legal_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.would_move(*dir))
            .collect()
    }

    /// Place a 2 (or, rarely, a 4) on a random empty cell.
    ///
    /// Returns `None` and changes nothing when the board is full.
    pub fn spawn_tile(&mut self) -> Option<(CellPos, u32)> {
        let empty = self.board.count_empty();
        if empty == 0 {
            return None;
        }
        let pick = self.rng.next_range(empty as u32) as usize;
        let cell = self.board.empty_cells().nth(pick)?;
        let value = if self.rng.next_f32() < self.rules.four_probability {
            4
        } else {
            2
        };

        self.board.set(cell, value);
        self.spawns.push(SpawnAnimation::new(cell, value));
        log::debug!("spawn {} at ({}, {})", value, cell.row, cell.col);
        Some((cell, value))
    }

    /// Emit a particle burst at the centre of `cell`.
    pub fn burst_particles(&mut self, cell: CellPos, color: Rgb) {
        let (x, y) = self.layout.tile_center(cell);
        let cfg = self.particle_cfg;
        self.particles.reserve(cfg.count);
        for _ in 0..cfg.count {
            self.particles
                .push(Particle::spawn(x, y, color, &cfg, &mut self.rng));
        }
    }

    /// No empty cell and no adjacent equal pair: nothing can ever move again.
    pub fn is_terminal(&self) -> bool {
        self.board.is_full() && !self.board.has_adjacent_pair()
    }

    pub fn has_won(&self) -> bool {
        self.board.max_tile() >= self.rules.win_tile
    }

    /// Advance all animations and particles one frame, dropping finished ones.
    pub fn tick(&mut self) {
        let slide_step = self.animation.slide_step;
        let spawn_step = self.animation.spawn_step;
        let ParticleConfig { gravity, shrink, .. } = self.particle_cfg;

        self.slides.iter_mut().for_each(|s| s.advance(slide_step));
        self.slides.retain(|s| !s.is_finished());

        self.spawns.iter_mut().for_each(|s| s.advance(spawn_step));
        self.spawns.retain(|s| !s.is_finished());

        self.particles
            .iter_mut()
            .for_each(|p| p.advance(gravity, shrink));
        self.particles.retain(Particle::is_alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[[u32; 4]]) -> Grid {
        let board = Board::from_rows(rows).expect("square board");
        Grid::with_board(&GameConfig::default(), board, SimpleRng::new(1))
    }

    #[test]
    fn move_left_merges_pairs_and_scores() {
        let mut g = grid(&[[2, 2, 2, 2], [2, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let out = g.move_tiles(Direction::Left);
        assert!(out.moved);
        assert_eq!(out.score_delta, 12);
        assert_eq!(g.score(), 12);
        assert_eq!(g.board().row(0), &[4, 4, 0, 0]);
        assert_eq!(g.board().row(1), &[4, 2, 0, 0]);
        assert_eq!(out.merges.len(), 3);
    }

    #[test]
    fn move_right_mirrors_coordinates() {
        let mut g = grid(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let out = g.move_tiles(Direction::Right);
        assert_eq!(g.board().row(0), &[0, 0, 0, 4]);
        assert_eq!(
            out.merges,
            vec![MergeEvent {
                cell: CellPos::new(0, 3),
                value: 4
            }]
        );
        let mut froms: Vec<_> = out.slides.iter().map(|s| s.from).collect();
        froms.sort();
        assert_eq!(froms, vec![CellPos::new(0, 0), CellPos::new(0, 1)]);
        assert!(out.slides.iter().all(|s| s.to == CellPos::new(0, 3) && s.merged));
    }

    #[test]
    fn move_up_and_down_use_columns() {
        let mut g = grid(&[[0, 4, 0, 0], [2, 0, 0, 0], [0, 4, 0, 0], [2, 0, 0, 0]]);
        let out = g.move_tiles(Direction::Up);
        assert!(out.moved);
        assert_eq!(
            g.board().to_rows(),
            vec![vec![4, 8, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]]
        );

        let out = g.move_tiles(Direction::Down);
        assert!(out.moved);
        assert_eq!(out.score_delta, 0);
        assert_eq!(g.board().row(3), &[4, 8, 0, 0]);
        assert_eq!(out.slides.len(), 2);
        assert!(out
            .slides
            .iter()
            .all(|s| s.from.row == 0 && s.to.row == 3 && s.from.col == s.to.col));
    }

    #[test]
    fn no_op_move_leaves_everything_untouched() {
        let mut g = grid(&[[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        let before = g.board().clone();
        let out = g.move_tiles(Direction::Left);
        assert!(!out.moved);
        assert!(out.slides.is_empty() && out.merges.is_empty());
        assert_eq!(g.board(), &before);
        assert!(g.slides().is_empty());

        // idempotent
        assert!(!g.move_tiles(Direction::Left).moved);
    }

    #[test]
    fn tiles_that_stay_put_emit_no_slide() {
        let mut g = grid(&[[2, 0, 4, 0], [0; 4], [0; 4], [0; 4]]);
        let out = g.move_tiles(Direction::Left);
        assert_eq!(
            out.slides,
            vec![SlideEvent {
                from: CellPos::new(0, 2),
                to: CellPos::new(0, 1),
                value: 4,
                merged: false
            }]
        );
        assert_eq!(g.slides().len(), 1);
    }

    #[test]
    fn would_move_does_not_mutate() {
        let g = grid(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(!g.would_move(Direction::Left));
        assert!(!g.would_move(Direction::Up));
        assert!(g.would_move(Direction::Right));
        assert!(g.would_move(Direction::Down));
        assert_eq!(g.board().row(0), &[2, 0, 0, 0]);
        assert_eq!(
            g.legal_moves().as_slice(),
            &[Direction::Right, Direction::Down]
        );
    }

    #[test]
    fn spawn_fills_empty_cell_with_two_or_four() {
        let mut g = grid(&[[0; 4], [0; 4], [0; 4], [0; 4]]);
        for _ in 0..16 {
            let (cell, value) = g.spawn_tile().expect("board has room");
            assert!(value == 2 || value == 4);
            assert_eq!(g.board().get(cell), Some(value));
        }
        assert!(g.board().is_full());
        assert_eq!(g.spawns().len(), 16);
    }

    #[test]
    fn spawn_on_full_board_is_noop() {
        let mut g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let before = g.board().clone();
        assert_eq!(g.spawn_tile(), None);
        assert_eq!(g.board(), &before);
        assert!(g.spawns().is_empty());
    }

    #[test]
    fn terminal_and_win_checks() {
        let stuck = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(stuck.is_terminal());
        assert!(stuck.legal_moves().is_empty());
        assert!(!stuck.has_won());

        let won = grid(&[[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(won.has_won());
        assert!(!won.is_terminal());
    }

    #[test]
    fn reset_spawns_start_tiles() {
        let mut g = grid(&[[8, 8, 8, 8], [0; 4], [0; 4], [0; 4]]);
        g.move_tiles(Direction::Left);
        g.burst_particles(CellPos::new(0, 0), Rgb::new(1, 1, 1));
        g.reset();
        assert_eq!(g.score(), 0);
        assert_eq!(g.board().count_empty(), 14);
        assert!(g.slides().is_empty());
        assert!(g.particles().is_empty());
        assert_eq!(g.spawns().len(), 2);
    }

    #[test]
    fn tick_retires_animations_and_particles() {
        let mut g = grid(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let out = g.move_tiles(Direction::Left);
        g.burst_particles(out.merges[0].cell, Rgb::new(200, 100, 50));
        g.spawn_tile();
        assert!(g.is_animating());
        assert_eq!(g.particles().len(), 20);

        for _ in 0..100 {
            g.tick();
        }
        assert!(!g.is_animating());
        assert!(g.particles().is_empty());

        // idle ticks are harmless
        g.tick();
        assert!(g.slides().is_empty());
    }

    #[test]
    fn tick_drops_particles_that_shrink_to_nothing() {
        let mut g = grid(&[[0; 4], [0; 4], [0; 4], [0; 4]]);
        let spark = Particle {
            x: 5.0,
            y: 2.0,
            vx: 0.0,
            vy: 0.0,
            color: Rgb::new(9, 9, 9),
            size: 0.15,
            life: 1.0,
            fade: 0.001,
        };
        g.particles.push(Particle { size: 3.0, ..spark });
        g.particles.push(spark);

        // default shrink is 0.1 per tick
        g.tick();
        assert_eq!(g.particles().len(), 2);
        g.tick();
        assert_eq!(g.particles().len(), 1);
        assert!(g.particles()[0].life > 0.9);
        assert!(g.particles()[0].size > 2.0);
    }

    #[test]
    fn burst_starts_at_tile_center() {
        let mut g = grid(&[[0; 4], [0; 4], [0; 4], [0; 4]]);
        g.burst_particles(CellPos::new(1, 2), Rgb::new(9, 9, 9));
        let center = g.layout().tile_center(CellPos::new(1, 2));
        assert!(g.particles().iter().all(|p| (p.x, p.y) == center));
    }
}
