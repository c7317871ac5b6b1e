//! Colour themes.
//!
//! Each theme changes the background gradient, grid, empty-cell and text
//! colours. Tile colours are shared by every theme.

use crate::types::{Rgb, ThemeId};

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub id: ThemeId,
    pub background: Rgb,
    pub gradient_top: Rgb,
    pub gradient_bottom: Rgb,
    pub grid: Rgb,
    pub empty_tile: Rgb,
    pub text: Rgb,
    pub light_text: Rgb,
}

const CLASSIC: Palette = Palette {
    id: ThemeId::Classic,
    background: Rgb::new(205, 193, 180),
    gradient_top: Rgb::new(170, 155, 140),
    gradient_bottom: Rgb::new(205, 193, 180),
    grid: Rgb::new(187, 173, 160),
    empty_tile: Rgb::new(220, 210, 200),
    text: Rgb::new(119, 110, 101),
    light_text: Rgb::new(249, 246, 242),
};

const DARK: Palette = Palette {
    id: ThemeId::Dark,
    background: Rgb::new(50, 50, 50),
    gradient_top: Rgb::new(30, 30, 30),
    gradient_bottom: Rgb::new(60, 60, 60),
    grid: Rgb::new(70, 70, 70),
    empty_tile: Rgb::new(80, 80, 80),
    text: Rgb::new(230, 230, 230),
    light_text: Rgb::new(255, 255, 255),
};

const OCEAN: Palette = Palette {
    id: ThemeId::Ocean,
    background: Rgb::new(100, 150, 200),
    gradient_top: Rgb::new(70, 130, 180),
    gradient_bottom: Rgb::new(135, 206, 235),
    grid: Rgb::new(100, 150, 200),
    empty_tile: Rgb::new(160, 200, 240),
    text: Rgb::new(20, 60, 100),
    light_text: Rgb::new(240, 248, 255),
};

const VIOLET: Palette = Palette {
    id: ThemeId::Violet,
    background: Rgb::new(150, 120, 170),
    gradient_top: Rgb::new(128, 0, 128),
    gradient_bottom: Rgb::new(186, 85, 211),
    grid: Rgb::new(150, 120, 170),
    empty_tile: Rgb::new(180, 160, 200),
    text: Rgb::new(70, 30, 80),
    light_text: Rgb::new(240, 230, 250),
};

const FOREST: Palette = Palette {
    id: ThemeId::Forest,
    background: Rgb::new(143, 188, 143),
    gradient_top: Rgb::new(85, 107, 47),
    gradient_bottom: Rgb::new(143, 188, 143),
    grid: Rgb::new(143, 188, 143),
    empty_tile: Rgb::new(170, 220, 170),
    text: Rgb::new(47, 79, 47),
    light_text: Rgb::new(240, 255, 240),
};

/// Shared tile colours, indexed by log2(value) - 1 (2 ..= 2048).
const TILE_COLORS: [Rgb; 11] = [
    Rgb::new(238, 228, 218),
    Rgb::new(237, 224, 200),
    Rgb::new(242, 177, 121),
    Rgb::new(245, 149, 99),
    Rgb::new(246, 124, 95),
    Rgb::new(246, 94, 59),
    Rgb::new(237, 207, 114),
    Rgb::new(237, 204, 97),
    Rgb::new(237, 200, 80),
    Rgb::new(237, 197, 63),
    Rgb::new(237, 194, 46),
];

/// Colour for tiles beyond 2048.
const SUPER_TILE: Rgb = Rgb::new(60, 58, 50);

/// Palette for a theme.
pub fn palette(id: ThemeId) -> &'static Palette {
    match id {
        ThemeId::Classic => &CLASSIC,
        ThemeId::Dark => &DARK,
        ThemeId::Ocean => &OCEAN,
        ThemeId::Violet => &VIOLET,
        ThemeId::Forest => &FOREST,
    }
}

impl Palette {
    /// Fill colour for a cell value; `0` is the theme's empty-cell colour.
    pub fn tile_color(&self, value: u32) -> Rgb {
        if value == 0 {
            return self.empty_tile;
        }
        tile_color(value)
    }

    /// Text colour for a tile value: dark on the light 2/4 tiles, light elsewhere.
    pub fn tile_text(&self, value: u32) -> Rgb {
        if value > 4 {
            self.light_text
        } else {
            self.text
        }
    }

    /// Vertical background gradient at `t` (0 = top, 1 = bottom).
    pub fn gradient(&self, t: f32) -> Rgb {
        self.gradient_top.lerp(self.gradient_bottom, t)
    }
}

/// Theme-independent colour of a non-empty tile.
pub fn tile_color(value: u32) -> Rgb {
    if value < 2 || !value.is_power_of_two() {
        return SUPER_TILE;
    }
    let idx = value.trailing_zeros() as usize - 1;
    TILE_COLORS.get(idx).copied().unwrap_or(SUPER_TILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_a_palette() {
        for id in ThemeId::ALL {
            assert_eq!(palette(id).id, id);
        }
    }

    #[test]
    fn tile_colors_are_shared_but_empty_cell_is_themed() {
        let classic = palette(ThemeId::Classic);
        let dark = palette(ThemeId::Dark);
        assert_eq!(classic.tile_color(8), dark.tile_color(8));
        assert_ne!(classic.tile_color(0), dark.tile_color(0));
    }

    #[test]
    fn tile_color_table() {
        assert_eq!(tile_color(2), Rgb::new(238, 228, 218));
        assert_eq!(tile_color(2048), Rgb::new(237, 194, 46));
        assert_eq!(tile_color(4096), SUPER_TILE);
        assert_eq!(tile_color(3), SUPER_TILE);
    }

    #[test]
    fn text_contrast_switches_above_four() {
        let p = palette(ThemeId::Classic);
        assert_eq!(p.tile_text(2), p.text);
        assert_eq!(p.tile_text(4), p.text);
        assert_eq!(p.tile_text(8), p.light_text);
    }

    #[test]
    fn gradient_endpoints() {
        let p = palette(ThemeId::Ocean);
        assert_eq!(p.gradient(0.0), p.gradient_top);
        assert_eq!(p.gradient(1.0), p.gradient_bottom);
    }
}
