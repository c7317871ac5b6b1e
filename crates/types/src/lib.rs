//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board
//!
//! The default playfield is a 4x4 grid. Cells are addressed by [`CellPos`]
//! (`row`, `col`), row 0 at the top and column 0 at the left. The size is a
//! runtime configuration value; [`DEFAULT_GRID_SIZE`] is only the default.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `SLIDE_STEP` | 0.1 | Slide progress per tick (10 ticks) |
//! | `SPAWN_STEP` | 0.15 | Spawn progress per tick (7 ticks) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{CellPos, Direction, GameAction, ThemeId};
//!
//! assert_eq!(Direction::Up.as_str(), "up");
//! assert_eq!(ThemeId::from_digit('3'), Some(ThemeId::Ocean));
//! assert_eq!(GameAction::Move(Direction::Left).as_str(), "moveLeft");
//! assert_eq!(CellPos::new(1, 2).row, 1);
//! ```

/// Default board side length (4x4).
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest supported board side length.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest supported board side length.
pub const MAX_GRID_SIZE: usize = 8;

/// Tile value that counts as a win.
pub const WIN_TILE: u32 = 2048;

/// Number of tiles placed on a fresh board.
pub const START_TILES: usize = 2;

/// Probability that a spawned tile is a 4 instead of a 2.
pub const FOUR_PROBABILITY: f32 = 0.1;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Slide animation progress added per tick.
pub const SLIDE_STEP: f32 = 0.1;

/// Spawn animation progress added per tick.
pub const SPAWN_STEP: f32 = 0.15;

/// Particles emitted per merge.
pub const PARTICLE_BURST: usize = 20;

/// Minimum interval between redraws of an otherwise static frame.
pub const STATIC_REFRESH_MS: u64 = 250;

/// Movement direction for a board move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in the order speculative checks try them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// A board coordinate: `row` from the top, `col` from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The five selectable colour themes.
///
/// Digits `1`-`5` select them in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Classic,
    Dark,
    Ocean,
    Violet,
    Forest,
}

impl ThemeId {
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Classic,
        ThemeId::Dark,
        ThemeId::Ocean,
        ThemeId::Violet,
        ThemeId::Forest,
    ];

    /// Map the selection digit (`'1'`..=`'5'`) to a theme.
    pub fn from_digit(ch: char) -> Option<Self> {
        let idx = ch.to_digit(10)? as usize;
        if idx == 0 {
            return None;
        }
        Self::ALL.get(idx - 1).copied()
    }

    /// Parse a theme key (case-insensitive). Accepts both the key and the
    /// colour alias (`blue`, `purple`, `green`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::ThemeId;
    ///
    /// assert_eq!(ThemeId::from_str("purple"), Some(ThemeId::Violet));
    /// assert_eq!(ThemeId::from_str("Forest"), Some(ThemeId::Forest));
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(ThemeId::Classic),
            "dark" => Some(ThemeId::Dark),
            "blue" | "ocean" => Some(ThemeId::Ocean),
            "purple" | "violet" => Some(ThemeId::Violet),
            "green" | "forest" => Some(ThemeId::Forest),
            _ => None,
        }
    }

    /// Stable lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Classic => "classic",
            ThemeId::Dark => "dark",
            ThemeId::Ocean => "blue",
            ThemeId::Violet => "purple",
            ThemeId::Forest => "green",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeId::Classic => "Classic",
            ThemeId::Dark => "Dark",
            ThemeId::Ocean => "Ocean",
            ThemeId::Violet => "Violet",
            ThemeId::Forest => "Forest",
        }
    }
}

/// Discrete player inputs understood by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Switch colour theme (allowed in every phase)
    SelectTheme(ThemeId),
    /// Start a new game (only honoured after game over)
    Restart,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Convert to camelCase name (themes are not named; they map to "selectTheme").
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::SelectTheme(_) => "selectTheme",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend: `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Darken towards black by `amount` (0 = unchanged, 1 = black).
    pub fn darken(self, amount: f32) -> Rgb {
        self.lerp(Rgb::new(0, 0, 0), amount)
    }
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.w as u32
            && (y as u32) < self.y as u32 + self.h as u32
    }
}

/// Clickable regions the renderer reported for the last drawn frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitRegions {
    pub restart: Option<Rect>,
    pub exit: Option<Rect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_matches_classic_game() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(WIN_TILE, 2048);
        assert_eq!(START_TILES, 2);
        assert_eq!(PARTICLE_BURST, 20);
        assert!((SLIDE_STEP - 0.1).abs() < f32::EPSILON);
        assert!((SPAWN_STEP - 0.15).abs() < f32::EPSILON);
    }

    #[test]
    fn theme_digits_cover_all_themes() {
        let picked: Vec<_> = ('1'..='5').filter_map(ThemeId::from_digit).collect();
        assert_eq!(picked, ThemeId::ALL.to_vec());
        assert_eq!(ThemeId::from_digit('0'), None);
        assert_eq!(ThemeId::from_digit('6'), None);
        assert_eq!(ThemeId::from_digit('x'), None);
    }

    #[test]
    fn theme_keys_roundtrip() {
        for id in ThemeId::ALL {
            assert_eq!(ThemeId::from_str(id.as_str()), Some(id));
            assert_eq!(ThemeId::from_str(id.name()), Some(id));
        }
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10, 5, 4, 2);
        assert!(r.contains(10, 5));
        assert!(r.contains(13, 6));
        assert!(!r.contains(14, 6));
        assert!(!r.contains(13, 7));
        assert!(!r.contains(9, 5));
    }

    #[test]
    fn rgb_lerp_endpoints() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(100, 100, 100));
        assert_eq!(Rgb::new(100, 50, 10).darken(1.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn action_names_for_logging() {
        assert_eq!(GameAction::Move(Direction::Down).as_str(), "moveDown");
        assert_eq!(GameAction::SelectTheme(ThemeId::Dark).as_str(), "selectTheme");
        assert_eq!(GameAction::Quit.as_str(), "quit");
        assert_eq!(Direction::Right.as_str(), "right");
    }
}
