//! Session controller - the per-frame game state machine
//!
//! ```text
//!            reset()
//!              │
//!              ▼
//!   ┌───── Playing ─────┐  move → slides → spawn → spawn settles → terminal?
//!   │                   │  no-op move → no legal move left?
//!   │ Restart           ▼
//!   └────────────── GameOver
//! ```
//!
//! Moves are ignored while the session is busy (slides or spawns animating,
//! or a spawn / terminal evaluation still pending) and after a state change in
//! the current frame. Theme selection works in every phase.

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::score::{ScoreStore, ScoreTracker};
use crate::snapshot::GameSnapshot;
use crate::theme::{self, Palette};
use crate::types::{Direction, GameAction, ThemeId};

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// One player's game: grid, score, theme and lifecycle.
pub struct Session<S: ScoreStore, R: RandomSource = SimpleRng> {
    grid: Grid<R>,
    score: ScoreTracker<S>,
    theme: ThemeId,
    phase: Phase,
    pending_spawn: bool,
    pending_terminal_check: bool,
    /// Set once a move or restart changed state this frame; cleared by `tick`.
    frame_locked: bool,
    won: bool,
    running: bool,
    games_started: u32,
}

impl<S: ScoreStore, R: RandomSource> Session<S, R> {
    /// Start a new session and deal the first board.
    pub fn new(config: &GameConfig, store: S, rng: R) -> Self {
        let mut session = Self::from_grid(Grid::new(config, rng), store, config.theme);
        session.reset();
        session
    }

    /// Wrap an existing grid without dealing a new board.
    pub fn from_grid(grid: Grid<R>, store: S, theme: ThemeId) -> Self {
        Self {
            grid,
            score: ScoreTracker::new(store),
            theme,
            phase: Phase::Playing,
            pending_spawn: false,
            pending_terminal_check: false,
            frame_locked: false,
            won: false,
            running: true,
            games_started: 0,
        }
    }

    /// New game. The best score and theme survive.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.score.reset();
        self.phase = Phase::Playing;
        self.pending_spawn = false;
        self.pending_terminal_check = false;
        self.won = false;
        self.games_started = self.games_started.wrapping_add(1);
        log::info!(
            "new game #{} (best {})",
            self.games_started,
            self.score.best_score()
        );
    }

    pub fn grid(&self) -> &Grid<R> {
        &self.grid
    }

    pub fn scores(&self) -> &ScoreTracker<S> {
        &self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn palette(&self) -> &'static Palette {
        theme::palette(self.theme)
    }

    /// Animations or follow-up work still in flight; moves are ignored.
    pub fn is_busy(&self) -> bool {
        self.grid.is_animating() || self.pending_spawn || self.pending_terminal_check
    }

    /// Apply one input. Returns true if anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.try_move(dir),
            GameAction::SelectTheme(id) => {
                let changed = self.theme != id;
                self.theme = id;
                changed
            }
            GameAction::Restart => {
                if self.phase != Phase::GameOver || self.frame_locked {
                    return false;
                }
                self.reset();
                self.frame_locked = true;
                true
            }
            GameAction::Quit => {
                self.quit();
                true
            }
        }
    }

    fn try_move(&mut self, dir: Direction) -> bool {
        if self.phase != Phase::Playing || self.frame_locked || self.is_busy() {
            return false;
        }

        let outcome = self.grid.move_tiles(dir);
        if !outcome.moved {
            // Wasted input, unless nothing can move at all any more.
            if self.grid.legal_moves().is_empty() {
                self.enter_game_over();
                return true;
            }
            return false;
        }

        self.frame_locked = true;
        self.score.record_score(outcome.score_delta);
        for merge in &outcome.merges {
            self.grid.burst_particles(merge.cell, theme::tile_color(merge.value));
        }
        self.pending_spawn = true;

        if !self.won && self.grid.has_won() {
            self.won = true;
            log::info!(
                "reached {} with score {}",
                self.grid.board().max_tile(),
                self.score.current_score()
            );
        }
        true
    }

    /// Advance one frame: animations, then the deferred spawn and terminal check.
    pub fn tick(&mut self) {
        self.frame_locked = false;
        self.grid.tick();

        if self.pending_spawn && self.grid.slides().is_empty() {
            self.pending_spawn = false;
            self.grid.spawn_tile();
            self.pending_terminal_check = true;
        }

        if self.pending_terminal_check && self.grid.spawns().is_empty() {
            self.pending_terminal_check = false;
            if self.grid.is_terminal() {
                self.enter_game_over();
            }
        }
    }

    /// Stop the session after a final best-score save.
    pub fn quit(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.score.persist();
        log::info!("quit (best {})", self.score.best_score());
    }

    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.frame_locked = true;
        log::info!(
            "game over: score {} best {}",
            self.score.current_score(),
            self.score.best_score()
        );
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let board = self.grid.board();
        out.size = board.size();
        out.board.clear();
        out.board.extend_from_slice(board.cells());
        out.slides.clear();
        out.slides.extend_from_slice(self.grid.slides());
        out.spawns.clear();
        out.spawns.extend_from_slice(self.grid.spawns());
        out.particles.clear();
        out.particles.extend_from_slice(self.grid.particles());
        out.layout = *self.grid.layout();
        out.score = self.score.current_score();
        out.best = self.score.best_score();
        out.new_best = self.score.is_new_best();
        out.theme = self.theme;
        out.game_over = self.is_game_over();
        out.won = self.won;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
