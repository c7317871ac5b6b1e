//! RNG module - deterministic randomness for tile spawns and particles
//!
//! Everything random in the engine goes through [`RandomSource`], so a game is
//! fully reproducible from its seed and tests can script exact outcomes.
//! [`SimpleRng`] is the default source: a small LCG, fast and allocation-free.

/// Source of random numbers used by the grid engine.
///
/// Only [`next_u32`](RandomSource::next_u32) is required; the derived helpers
/// can be overridden by scripted test sources.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, max)`. `max` must be non-zero.
    ///
    /// Uses the high bits of the generator (multiply-shift), which are far
    /// better distributed than the low bits of an LCG.
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform value in `[0, 1)`.
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform value in `[lo, hi)`.
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }

    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }

    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        (**self).range_f32(lo, hi)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock; used when no explicit seed is configured.
    pub fn from_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Current generator state (a game restarted from this state replays identically).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
