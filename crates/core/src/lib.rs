//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules, animation state and session lifecycle of the
//! game. It does no terminal or file I/O of its own: randomness comes in
//! through [`RandomSource`] and best-score persistence through [`ScoreStore`],
//! so every rule can be driven from a test with scripted inputs.
//!
//! # Module Structure
//!
//! - [`board`]: square board of tile values, orientation transforms, row compaction
//! - [`grid`]: move/merge engine, spawning, particles and animation bookkeeping
//! - [`anim`]: slide and spawn animations, particles, easing
//! - [`theme`]: the five colour palettes and the shared tile colours
//! - [`score`]: current/best score tracking over a pluggable store
//! - [`session`]: per-frame state machine (playing, game over, restart, quit)
//! - [`config`]: tunables, with environment overrides
//! - [`rng`]: seeded LCG behind the [`RandomSource`] trait
//!
//! # Rules
//!
//! - Every move is computed on the board as if it were a move to the left,
//!   after transposing and/or mirroring it, and then transformed back
//! - A tile merges at most once per move; each merge scores the merged value
//! - After any move that changed the board, one new tile spawns once the
//!   slide animations finish: a 2 with probability 0.9, otherwise a 4
//! - The game is over when the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, Grid, GameConfig, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let config = GameConfig::default();
//! let board = Board::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).expect("square board");
//! let mut grid = Grid::with_board(&config, board, SimpleRng::new(7));
//!
//! let outcome = grid.move_tiles(Direction::Left);
//! assert!(outcome.moved);
//! assert_eq!(outcome.score_delta, 4);
//! assert_eq!(grid.board().row(0), &[4, 0, 0, 0]);
//! ```
//!
//! # Timing
//!
//! The session is ticked at a fixed 16ms step. Slides take 10 ticks and
//! spawns 7; moves are ignored until both have settled.

pub mod anim;
pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;
pub mod score;
pub mod session;
pub mod snapshot;
pub mod theme;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use anim::{Particle, SlideAnimation, SpawnAnimation};
pub use board::Board;
pub use config::{GameConfig, Layout};
pub use error::StoreError;
pub use grid::{compute_move, Grid, MergeEvent, MoveOutcome, SlideEvent};
pub use rng::{RandomSource, SimpleRng};
pub use score::{ScoreStore, ScoreTracker};
pub use session::{Phase, Session};
pub use snapshot::GameSnapshot;
pub use theme::{palette, Palette};
