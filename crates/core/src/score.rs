//! Score tracking - current and best score, with best-score persistence
//!
//! The tracker never fails: persistence is best-effort. A failed save is
//! logged and otherwise ignored; a failed load means a best score of 0.

use crate::error::Result;

/// Where the best score lives between sessions.
pub trait ScoreStore {
    /// Stored best score, or 0 when missing or unreadable.
    fn load(&self) -> u32;

    /// Persist `best`.
    fn save(&mut self, best: u32) -> Result<()>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, best: u32) -> Result<()> {
        (**self).save(best)
    }
}

/// Current/best score bookkeeping.
#[derive(Debug, Clone)]
pub struct ScoreTracker<S: ScoreStore> {
    current: u32,
    best: u32,
    /// This game already beat the previous best.
    beat_best: bool,
    store: S,
}

impl<S: ScoreStore> ScoreTracker<S> {
    /// Create a tracker, loading the best score from `store`.
    pub fn new(store: S) -> Self {
        let best = store.load();
        Self {
            current: 0,
            best,
            beat_best: false,
            store,
        }
    }

    /// Add `delta` to the current score; saves when a new best is reached.
    pub fn record_score(&mut self, delta: u32) {
        self.current = self.current.saturating_add(delta);
        if self.current > self.best {
            if !self.beat_best {
                self.beat_best = true;
                log::info!("new best score (previous {})", self.best);
            }
            self.best = self.current;
            self.save_best();
        }
    }

    /// Zero the current score; the best score is kept.
    pub fn reset(&mut self) {
        self.current = 0;
        self.beat_best = false;
    }

    pub fn current_score(&self) -> u32 {
        self.current
    }

    pub fn best_score(&self) -> u32 {
        self.best
    }

    /// The current game holds (or ties) the best score.
    pub fn is_new_best(&self) -> bool {
        self.current > 0 && self.current >= self.best
    }

    /// Save the best score unconditionally (used on quit).
    pub fn persist(&mut self) {
        self.save_best();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn save_best(&mut self) {
        if let Err(e) = self.store.save(self.best) {
            log::warn!("could not save best score {}: {}", self.best, e);
        }
    }
}
