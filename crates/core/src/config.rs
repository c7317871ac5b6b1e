//! Game configuration.
//!
//! One immutable [`GameConfig`] is built at startup (defaults, then
//! environment overrides) and handed to constructors. Nothing in the engine
//! reads ambient global state.
//!
//! # Environment Variables
//!
//! - `TUI_2048_GRID_SIZE`: board side length, 2..=8 (default: 4)
//! - `TUI_2048_THEME`: starting theme key (default: "classic")
//! - `TUI_2048_SCORE_PATH`: best-score file (default: "high_score.txt")
//! - `TUI_2048_SEED`: fixed RNG seed (default: seeded from the clock)
//! - `TUI_2048_LOG_PATH`: write logs to this file (default: logging off)

use std::path::PathBuf;

use crate::types::{
    CellPos, ThemeId, DEFAULT_GRID_SIZE, FOUR_PROBABILITY, MAX_GRID_SIZE, MIN_GRID_SIZE,
    PARTICLE_BURST, SLIDE_STEP, SPAWN_STEP, START_TILES, TICK_MS, WIN_TILE,
};

/// Board rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub size: usize,
    pub win_tile: u32,
    pub start_tiles: usize,
    pub four_probability: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            win_tile: WIN_TILE,
            start_tiles: START_TILES,
            four_probability: FOUR_PROBABILITY,
        }
    }
}

/// Frame pacing and animation increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub tick_ms: u32,
    pub slide_step: f32,
    pub spawn_step: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            slide_step: SLIDE_STEP,
            spawn_step: SPAWN_STEP,
        }
    }
}

/// Merge particle physics, in screen units (terminal cells) per tick.
///
/// Terminal cells are roughly twice as tall as they are wide, so vertical
/// speed and gravity are halved relative to horizontal speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub speed_x: f32,
    pub speed_y: f32,
    pub gravity: f32,
    pub size_min: u32,
    pub size_max: u32,
    pub shrink: f32,
    pub fade_min: f32,
    pub fade_max: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_BURST,
            speed_x: 0.6,
            speed_y: 0.3,
            gravity: 0.02,
            size_min: 4,
            size_max: 8,
            shrink: 0.1,
            fade_min: 0.02,
            fade_max: 0.05,
        }
    }
}

/// Board geometry in terminal cells.
///
/// A tile occupies `pitch - gap` cells and is separated from its neighbours
/// (and the board edge) by `gap` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub pitch_x: u16,
    pub pitch_y: u16,
    pub gap_x: u16,
    pub gap_y: u16,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            pitch_x: 8,
            pitch_y: 4,
            gap_x: 1,
            gap_y: 1,
        }
    }
}

impl Layout {
    pub fn tile_w(&self) -> u16 {
        self.pitch_x.saturating_sub(self.gap_x)
    }

    pub fn tile_h(&self) -> u16 {
        self.pitch_y.saturating_sub(self.gap_y)
    }

    /// Inner board size (without border) for an `n`x`n` grid.
    pub fn board_size(&self, n: usize) -> (u16, u16) {
        let n = n as u16;
        (
            n * self.pitch_x + self.gap_x,
            n * self.pitch_y + self.gap_y,
        )
    }

    /// Top-left corner of a tile, relative to the board's inner origin.
    pub fn tile_origin(&self, pos: CellPos) -> (f32, f32) {
        (
            (pos.col as u16 * self.pitch_x + self.gap_x) as f32,
            (pos.row as u16 * self.pitch_y + self.gap_y) as f32,
        )
    }

    /// Centre of a tile, relative to the board's inner origin.
    pub fn tile_center(&self, pos: CellPos) -> (f32, f32) {
        let (x, y) = self.tile_origin(pos);
        (x + self.tile_w() as f32 / 2.0, y + self.tile_h() as f32 / 2.0)
    }
}

/// Complete startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid: GridConfig,
    pub animation: AnimationConfig,
    pub particles: ParticleConfig,
    pub layout: Layout,
    pub theme: ThemeId,
    pub score_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            animation: AnimationConfig::default(),
            particles: ParticleConfig::default(),
            layout: Layout::default(),
            theme: ThemeId::default(),
            score_path: PathBuf::from("high_score.txt"),
            log_path: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(size) = lookup("TUI_2048_GRID_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(n))
        {
            config.grid.size = size;
        }

        if let Some(theme) = lookup("TUI_2048_THEME").and_then(|s| ThemeId::from_str(&s)) {
            config.theme = theme;
        }

        if let Some(path) = non_empty(lookup("TUI_2048_SCORE_PATH")) {
            config.score_path = PathBuf::from(path);
        }

        config.log_path = non_empty(lookup("TUI_2048_LOG_PATH")).map(PathBuf::from);

        config.seed = lookup("TUI_2048_SEED").and_then(|s| s.trim().parse().ok());

        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}
