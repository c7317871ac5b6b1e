//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom: a header with the title and the score boxes,
//! the board, and a one-line footer. When the game is over the board is
//! shaded and an overlay with two buttons is drawn on top of it; the button
//! rectangles are returned as [`HitRegions`] for mouse handling.

use crate::core::theme::{self, Palette};
use crate::core::{GameSnapshot, Layout};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellPos, HitRegions, Rect};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const HEADER_H: u16 = 3;
const FOOTER_H: u16 = 1;
const SCORE_BOX_W: u16 = 10;
const BUTTON_PAD: u16 = 2;

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    anchor_y: AnchorY,
    /// How much the game-over overlay darkens the board.
    overlay_shade: f32,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            overlay_shade: 0.55,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board rectangle (in terminal cells) for a snapshot in a viewport.
    pub fn board_rect(&self, snap: &GameSnapshot, viewport: Viewport) -> Rect {
        let (w, h) = snap.layout.board_size(snap.size);
        let total_h = HEADER_H + h + FOOTER_H;
        let x = viewport.width.saturating_sub(w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        Rect::new(x, top + HEADER_H, w, h)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames; it is resized to the viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) -> HitRegions {
        fb.resize(viewport.width, viewport.height);
        let palette = theme::palette(snap.theme);

        self.draw_background(fb, palette);

        let board = self.board_rect(snap, viewport);
        self.draw_header(fb, snap, palette, board);
        self.draw_board(fb, snap, palette, board);
        self.draw_particles(fb, snap, board);
        self.draw_footer(fb, snap, palette, board);

        if snap.game_over {
            self.draw_game_over(fb, snap, palette, board)
        } else {
            HitRegions::default()
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> (FrameBuffer, HitRegions) {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let hits = self.render_into(snap, viewport, &mut fb);
        (fb, hits)
    }

    fn draw_background(&self, fb: &mut FrameBuffer, palette: &Palette) {
        let h = fb.height();
        let w = fb.width();
        for y in 0..h {
            let t = if h > 1 { y as f32 / (h - 1) as f32 } else { 0.0 };
            let bg = palette.gradient(t);
            fb.fill_rect(Rect::new(0, y, w, 1), ' ', CellStyle::new(palette.text, bg));
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, palette: &Palette, board: Rect) {
        let y = board.y.saturating_sub(HEADER_H);
        let row_bg = fb.get(board.x, y).map(|c| c.style.bg).unwrap_or(palette.background);
        fb.put_str(board.x, y + 1, "2048", CellStyle::new(palette.text, row_bg).bold());

        let label = CellStyle::new(palette.empty_tile, palette.grid);
        let value = CellStyle::new(palette.light_text, palette.grid).bold();
        let right = board.x.saturating_add(board.w);
        let best_x = right.saturating_sub(SCORE_BOX_W);
        let score_x = best_x.saturating_sub(SCORE_BOX_W + 1);

        for (x, title, n) in [(score_x, "SCORE", snap.score), (best_x, "BEST", snap.best)] {
            fb.fill_rect(Rect::new(x, y, SCORE_BOX_W, 2), ' ', label);
            fb.put_str_centered(x, y, SCORE_BOX_W, title, label);
            fb.put_str_centered(x, y + 1, SCORE_BOX_W, &n.to_string(), value);
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, palette: &Palette, board: Rect) {
        let layout = snap.layout;
        fb.fill_rect(board, ' ', CellStyle::new(palette.text, palette.grid));

        // Empty slots everywhere first; tiles are painted over them.
        for row in 0..snap.size {
            for col in 0..snap.size {
                let (x, y) = layout.tile_origin(CellPos::new(row, col));
                self.draw_tile(fb, palette, &layout, board, x, y, 0, 1.0);
            }
        }

        // Tiles at rest: everything not covered by a slide or a spawn.
        for row in 0..snap.size {
            for col in 0..snap.size {
                let pos = CellPos::new(row, col);
                let value = snap.cell(pos);
                if value == 0 || self.is_animated_cell(snap, pos) {
                    continue;
                }
                let (x, y) = layout.tile_origin(pos);
                self.draw_tile(fb, palette, &layout, board, x, y, value, 1.0);
            }
        }

        for slide in &snap.slides {
            let (x, y) = slide.position(&layout);
            self.draw_tile(fb, palette, &layout, board, x, y, slide.value, slide.scale());
        }

        // Spawns wait until every slide has landed, like the board itself.
        if snap.slides.is_empty() {
            for spawn in &snap.spawns {
                let (x, y) = layout.tile_origin(spawn.cell);
                self.draw_tile(fb, palette, &layout, board, x, y, spawn.value, spawn.scale());
            }
        }
    }

    fn is_animated_cell(&self, snap: &GameSnapshot, pos: CellPos) -> bool {
        snap.slides.iter().any(|s| s.to == pos) || snap.spawns.iter().any(|s| s.cell == pos)
    }

    /// Paint one tile whose unscaled top-left corner is at board-local
    /// `(x, y)`, scaled about its centre.
    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        palette: &Palette,
        layout: &Layout,
        board: Rect,
        x: f32,
        y: f32,
        value: u32,
        scale: f32,
    ) {
        if scale <= 0.0 {
            return;
        }
        let full_w = layout.tile_w() as f32;
        let full_h = layout.tile_h() as f32;
        let w = (full_w * scale).round().max(1.0);
        let h = (full_h * scale).round().max(1.0);
        let left = board.x as f32 + x + (full_w - w) / 2.0;
        let top = board.y as f32 + y + (full_h - h) / 2.0;
        let Some(rect) = clip_rect(left.round(), top.round(), w, h, board) else {
            return;
        };

        let style = CellStyle::new(palette.tile_text(value), palette.tile_color(value)).bold();
        fb.fill_rect(rect, ' ', style);
        if value == 0 {
            return;
        }

        let label = value.to_string();
        if (label.len() as u16) <= rect.w {
            fb.put_str_centered(rect.x, rect.y + rect.h / 2, rect.w, &label, style);
        }
    }

    fn draw_particles(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, board: Rect) {
        for p in &snap.particles {
            let px = (board.x as f32 + p.x).round();
            let py = (board.y as f32 + p.y).round();
            if px < 0.0 || py < 0.0 || px >= fb.width() as f32 || py >= fb.height() as f32 {
                continue;
            }
            let (x, y) = (px as u16, py as u16);
            let under = fb.get(x, y).unwrap_or_default();
            let fg = under.style.bg.lerp(p.color, p.alpha());
            let glyph = if p.size >= 6.0 { '●' } else { '•' };
            fb.set(
                x,
                y,
                Cell {
                    ch: glyph,
                    style: CellStyle::new(fg, under.style.bg),
                },
            );
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, palette: &Palette, board: Rect) {
        let y = board.y.saturating_add(board.h);
        let bg = fb.get(board.x, y).map(|c| c.style.bg).unwrap_or(palette.background);
        let style = CellStyle::new(palette.text, bg);
        let text = if snap.won {
            format!("2048 reached! · theme: {} · 1-5 theme · q quit", snap.theme.name())
        } else {
            format!("arrows move · theme: {} · 1-5 theme · q quit", snap.theme.name())
        };
        fb.put_str_centered(0, y, fb.width(), &text, style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, palette: &Palette, board: Rect) -> HitRegions {
        fb.shade_rect(board, self.overlay_shade);

        let shaded_bg = palette.grid.darken(self.overlay_shade);
        let text = CellStyle::new(palette.light_text, shaded_bg);
        let title = text.bold();
        let highlight = CellStyle::new(theme::tile_color(2048), shaded_bg).bold();

        let restart_label = "Play Again";
        let exit_label = "Exit Game";
        let bw = exit_label.len().max(restart_label.len()) as u16 + 2 * BUTTON_PAD;
        let side_by_side = board.w >= 2 * bw + 2;

        let lines = if side_by_side { 6 } else { 7 };
        let mut y = board.y + board.h.saturating_sub(lines) / 2;

        fb.put_str_centered(board.x, y, board.w, "Game Over!", title);
        y += 1;
        fb.put_str_centered(board.x, y, board.w, &format!("Your Score: {}", snap.score), text);
        y += 1;
        if snap.new_best {
            fb.put_str_centered(board.x, y, board.w, "NEW HIGH SCORE!", highlight);
        } else {
            fb.put_str_centered(board.x, y, board.w, &format!("Best Score: {}", snap.best), text);
        }
        y += 2;

        let (restart, exit) = if side_by_side {
            let left = board.x + (board.w - (2 * bw + 2)) / 2;
            let r = Rect::new(left, y, bw, 1);
            let e = Rect::new(left + bw + 2, y, bw, 1);
            y += 1;
            (r, e)
        } else {
            let left = board.x + board.w.saturating_sub(bw) / 2;
            let r = Rect::new(left, y, bw, 1);
            let e = Rect::new(left, y + 1, bw, 1);
            y += 2;
            (r, e)
        };

        let restart_style = CellStyle::new(palette.light_text, Rgb::new(100, 180, 100)).bold();
        let exit_style = CellStyle::new(palette.light_text, Rgb::new(180, 100, 100)).bold();
        fb.fill_rect(restart, ' ', restart_style);
        fb.put_str_centered(restart.x, restart.y, restart.w, restart_label, restart_style);
        fb.fill_rect(exit, ' ', exit_style);
        fb.put_str_centered(exit.x, exit.y, exit.w, exit_label, exit_style);

        fb.put_str_centered(board.x, y, board.w, "Press 1-5 to change theme", text);

        HitRegions {
            restart: Some(restart),
            exit: Some(exit),
        }
    }
}

/// Intersect a float rectangle with `bounds`; `None` when nothing is left.
fn clip_rect(x: f32, y: f32, w: f32, h: f32, bounds: Rect) -> Option<Rect> {
    let x0 = x.max(bounds.x as f32);
    let y0 = y.max(bounds.y as f32);
    let x1 = (x + w).min(bounds.x as f32 + bounds.w as f32);
    let y1 = (y + h).min(bounds.y as f32 + bounds.h as f32);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect::new(x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16))
}
