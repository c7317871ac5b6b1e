use std::hash::{Hash, Hasher};

use crate::anim::{Particle, SlideAnimation, SpawnAnimation};
use crate::config::Layout;
use crate::types::{CellPos, ThemeId};

/// Everything the renderer needs for one frame.
///
/// Filled by [`Session::snapshot_into`](crate::session::Session::snapshot_into),
/// which reuses the vectors' allocations across frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major tile values.
    pub board: Vec<u32>,
    pub slides: Vec<SlideAnimation>,
    pub spawns: Vec<SpawnAnimation>,
    pub particles: Vec<Particle>,
    pub layout: Layout,
    pub score: u32,
    pub best: u32,
    pub new_best: bool,
    pub theme: ThemeId,
    pub game_over: bool,
    pub won: bool,
}

impl GameSnapshot {
    pub fn cell(&self, pos: CellPos) -> u32 {
        if pos.row >= self.size || pos.col >= self.size {
            return 0;
        }
        self.board[pos.row * self.size + pos.col]
    }

    /// Anything on screen still moving.
    pub fn is_animating(&self) -> bool {
        !self.slides.is_empty() || !self.spawns.is_empty() || !self.particles.is_empty()
    }

    /// Hash of the static content; equal fingerprints render identical
    /// frames when nothing is animating.
    pub fn fingerprint(&self) -> u64 {
        let mut h = std::collections::hash_map::DefaultHasher::new();
        self.size.hash(&mut h);
        self.board.hash(&mut h);
        self.score.hash(&mut h);
        self.best.hash(&mut h);
        self.new_best.hash(&mut h);
        self.theme.hash(&mut h);
        self.game_over.hash(&mut h);
        self.won.hash(&mut h);
        h.finish()
    }
}
