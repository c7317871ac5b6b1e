//! Animation primitives: tile slides, tile spawns and merge particles.
//!
//! Each kind is a small value type with its own per-tick `advance` and a
//! completion predicate. The grid keeps one homogeneous collection per kind.

use crate::config::{Layout, ParticleConfig};
use crate::rng::RandomSource;
use crate::types::{CellPos, Rgb};

/// Quadratic ease-out: fast start, gentle landing.
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// A tile travelling from one cell to another after a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    pub from: CellPos,
    pub to: CellPos,
    /// Value shown at the destination once the move settles.
    pub value: u32,
    /// Both sources of a merge carry this flag.
    pub merged: bool,
    progress: f32,
}

impl SlideAnimation {
    pub fn new(from: CellPos, to: CellPos, value: u32, merged: bool) -> Self {
        Self {
            from,
            to,
            value,
            merged,
            progress: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn advance(&mut self, step: f32) {
        self.progress = (self.progress + step).min(1.0);
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Eased top-left position between the two tile origins.
    pub fn position(&self, layout: &Layout) -> (f32, f32) {
        let (x0, y0) = layout.tile_origin(self.from);
        let (x1, y1) = layout.tile_origin(self.to);
        let t = ease_out_quad(self.progress);
        (x0 + (x1 - x0) * t, y0 + (y1 - y0) * t)
    }

    /// Merged tiles pop slightly larger near the end of the slide.
    pub fn scale(&self) -> f32 {
        if self.merged && self.progress > 0.8 {
            1.1 - (self.progress - 0.8) * 0.5
        } else {
            1.0
        }
    }
}

/// A freshly spawned tile growing into place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnAnimation {
    pub cell: CellPos,
    pub value: u32,
    progress: f32,
}

impl SpawnAnimation {
    pub fn new(cell: CellPos, value: u32) -> Self {
        Self {
            cell,
            value,
            progress: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn advance(&mut self, step: f32) {
        self.progress = (self.progress + step).min(1.0);
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Size factor in `[0, 1]`; reaches full size slightly before the end.
    pub fn scale(&self) -> f32 {
        (self.progress * 1.2).min(1.0)
    }
}

/// A single spark from a merge burst, in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgb,
    pub size: f32,
    pub life: f32,
    pub fade: f32,
}

impl Particle {
    /// Random spark at `(x, y)` drawn from `cfg`'s ranges.
    pub fn spawn(x: f32, y: f32, color: Rgb, cfg: &ParticleConfig, rng: &mut impl RandomSource) -> Self {
        let size_span = cfg.size_max.saturating_sub(cfg.size_min) + 1;
        Self {
            x,
            y,
            vx: rng.range_f32(-cfg.speed_x, cfg.speed_x),
            vy: rng.range_f32(-cfg.speed_y, cfg.speed_y),
            color,
            size: (cfg.size_min + rng.next_range(size_span)) as f32,
            life: 1.0,
            fade: rng.range_f32(cfg.fade_min, cfg.fade_max),
        }
    }

    /// One physics step.
    pub fn advance(&mut self, gravity: f32, shrink: f32) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += gravity;
        self.size -= shrink;
        self.life -= self.fade;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0 && self.size > 0.0
    }

    /// Opacity derived from remaining life.
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn ease_out_quad_endpoints_and_shape() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert!((ease_out_quad(0.5) - 0.75).abs() < 1e-6);
        assert_eq!(ease_out_quad(2.0), 1.0);
    }

    #[test]
    fn slide_finishes_after_enough_steps_and_clamps() {
        let mut slide = SlideAnimation::new(CellPos::new(0, 3), CellPos::new(0, 0), 2, false);
        let mut ticks = 0;
        while !slide.is_finished() {
            slide.advance(0.1);
            ticks += 1;
            assert!(ticks <= 11);
        }
        assert!(ticks >= 10);
        assert_eq!(slide.progress(), 1.0);
        slide.advance(0.1);
        assert_eq!(slide.progress(), 1.0);
    }

    #[test]
    fn slide_position_interpolates_between_origins() {
        let layout = Layout::default();
        let mut slide = SlideAnimation::new(CellPos::new(0, 0), CellPos::new(0, 2), 4, false);
        assert_eq!(slide.position(&layout), layout.tile_origin(CellPos::new(0, 0)));

        slide.advance(0.5);
        let (x, y) = slide.position(&layout);
        // eased 0.75 of the way from x=1 to x=17
        assert!((x - 13.0).abs() < 1e-4);
        assert_eq!(y, 1.0);

        slide.advance(0.5);
        assert_eq!(slide.position(&layout), layout.tile_origin(CellPos::new(0, 2)));
    }

    #[test]
    fn merged_slide_pops_near_end() {
        let mut slide = SlideAnimation::new(CellPos::new(0, 1), CellPos::new(0, 0), 4, true);
        assert_eq!(slide.scale(), 1.0);
        slide.advance(0.9);
        assert!(slide.scale() > 1.0);

        let mut plain = SlideAnimation::new(CellPos::new(0, 1), CellPos::new(0, 0), 4, false);
        plain.advance(0.9);
        assert_eq!(plain.scale(), 1.0);
    }

    #[test]
    fn spawn_scale_grows_to_one() {
        let mut spawn = SpawnAnimation::new(CellPos::new(1, 1), 2);
        assert_eq!(spawn.scale(), 0.0);
        spawn.advance(0.5);
        assert!((spawn.scale() - 0.6).abs() < 1e-6);
        spawn.advance(0.5);
        assert!(spawn.is_finished());
        assert_eq!(spawn.scale(), 1.0);
    }

    #[test]
    fn particle_spawn_respects_ranges() {
        let cfg = ParticleConfig::default();
        let mut rng = SimpleRng::new(5);
        for _ in 0..200 {
            let p = Particle::spawn(10.0, 5.0, Rgb::new(1, 2, 3), &cfg, &mut rng);
            assert!(p.size >= cfg.size_min as f32 && p.size <= cfg.size_max as f32);
            assert!(p.vx.abs() <= cfg.speed_x);
            assert!(p.vy.abs() <= cfg.speed_y);
            assert!(p.fade >= cfg.fade_min && p.fade <= cfg.fade_max);
            assert_eq!(p.life, 1.0);
        }
    }

    #[test]
    fn particle_physics_step() {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            vx: 1.0,
            vy: -1.0,
            color: Rgb::default(),
            size: 1.0,
            life: 1.0,
            fade: 0.25,
        };
        p.advance(0.5, 0.1);
        assert_eq!((p.x, p.y), (1.0, -1.0));
        assert_eq!(p.vy, -0.5);
        assert!((p.size - 0.9).abs() < 1e-6);
        assert_eq!(p.life, 0.75);
        assert!(p.is_alive());

        for _ in 0..3 {
            p.advance(0.5, 0.1);
        }
        assert!(!p.is_alive());
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn particle_dies_when_shrunk_away_with_life_left() {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            color: Rgb::default(),
            size: 0.15,
            life: 1.0,
            fade: 0.01,
        };
        p.advance(0.0, 0.1);
        assert!(p.is_alive());
        p.advance(0.0, 0.1);
        assert!(p.size <= 0.0);
        assert!(p.life > 0.9);
        assert!(!p.is_alive());
    }
}
