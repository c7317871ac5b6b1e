//! Frame pacing for mostly static screens.

use crate::types::STATIC_REFRESH_MS;

/// Decides whether a frame needs drawing.
///
/// Animated frames always draw. Static frames draw when their fingerprint
/// changes, and otherwise at most once per refresh interval so a resized or
/// scribbled-over terminal still heals.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_ms: u64,
    last: Option<(u64, u64)>,
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(STATIC_REFRESH_MS)
    }
}

impl RenderThrottle {
    pub fn new(refresh_ms: u64) -> Self {
        Self {
            refresh_ms,
            last: None,
        }
    }

    /// `now_ms` is any monotonic clock; `fingerprint` identifies the static
    /// content of the frame.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if animating => true,
            Some((_, seen)) if seen != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.refresh_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Force the next frame to draw.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
