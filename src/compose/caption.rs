//! Fixed-width bitmap text for tile captions

use crate::compose::blend;
use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgba, RgbaImage};

// font8x8 glyphs are 8×8 with the baseline under row 6
const GLYPH_SIZE: u32 = 8;
const GLYPH_ASCENT: u32 = 7;

/// Fallback glyph for characters the font does not cover
pub const REPLACEMENT_CHAR: char = '?';

/// An 8×8 bitmap font with independent integer scaling per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionFont {
    scale_x: u32,
    scale_y: u32,
}

impl Default for CaptionFont {
    /// 8×16 cells
    fn default() -> Self {
        Self::new(1, 2)
    }
}

impl CaptionFont {
    /// Scale factors below one are raised to one
    pub fn new(scale_x: u32, scale_y: u32) -> Self {
        Self {
            scale_x: scale_x.max(1),
            scale_y: scale_y.max(1),
        }
    }

    /// Horizontal distance between consecutive characters
    pub const fn advance(&self) -> u32 {
        GLYPH_SIZE * self.scale_x
    }

    /// Height of one character cell
    pub const fn line_height(&self) -> u32 {
        GLYPH_SIZE * self.scale_y
    }

    /// Distance from the top of a cell to the baseline
    pub const fn ascent(&self) -> u32 {
        GLYPH_ASCENT * self.scale_y
    }

    /// Width in pixels of `text` drawn on one line
    pub fn text_width(&self, text: &str) -> u32 {
        (text.chars().count() as u32).saturating_mul(self.advance())
    }

    /// Row bitmaps for `ch`, bit 0 being the leftmost pixel
    pub fn glyph(ch: char) -> [u8; 8] {
        BASIC_FONTS
            .get(ch)
            .or_else(|| LATIN_FONTS.get(ch))
            .or_else(|| BASIC_FONTS.get(REPLACEMENT_CHAR))
            .unwrap_or([0; 8])
    }

    /// Draw `text` with its baseline at `baseline_y`, starting at `x`
    ///
    /// Pixels falling outside the canvas are skipped.
    pub fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        x: u32,
        baseline_y: u32,
        text: &str,
        color: Rgba<u8>,
    ) {
        let top = baseline_y.saturating_sub(self.ascent());
        let mut pen_x = x;

        for ch in text.chars() {
            if pen_x >= canvas.width() {
                break;
            }
            self.draw_glyph(canvas, pen_x, top, Self::glyph(ch), color);
            pen_x = pen_x.saturating_add(self.advance());
        }
    }

    fn draw_glyph(&self, canvas: &mut RgbaImage, x: u32, top: u32, rows: [u8; 8], color: Rgba<u8>) {
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = x + col * self.scale_x;
                let py = top + row as u32 * self.scale_y;
                for dy in 0..self.scale_y {
                    for dx in 0..self.scale_x {
                        if let Some(pixel) = canvas.get_pixel_mut_checked(px + dx, py + dy) {
                            blend::over(pixel, color);
                        }
                    }
                }
            }
        }
    }
}
