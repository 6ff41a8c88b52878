use image::{Rgba, RgbaImage};

use super::{
    frame::{GlyphCell, GlyphFrame},
    palette::GlyphPalette,
};
use crate::EffectOptions;

/// Weighted brightness of a pixel in [0, 1].
pub fn luminance(red: u8, green: u8, blue: u8) -> f32 {
    (0.30 * f32::from(red) + 0.59 * f32::from(green) + 0.11 * f32::from(blue)) / 255.0
}

/// Brightness used for glyph selection. Fully transparent pixels count as
/// brightest so they render as background rather than leaking their RGB.
pub fn brightness(red: u8, green: u8, blue: u8, alpha: u8) -> f32 {
    if alpha == 0 {
        return 1.0;
    }
    luminance(red, green, blue).clamp(0.0, 1.0)
}

/// Palette index for a brightness value: `floor((1 - b) * (len - 1))`,
/// mirrored when `invert` is set.
pub fn palette_index(brightness: f32, palette_len: usize, invert: bool) -> usize {
    if palette_len == 0 {
        return 0;
    }

    let max_index = palette_len - 1;
    let brightness = brightness.clamp(0.0, 1.0);
    let index = (((1.0 - brightness) * max_index as f32).floor() as usize).min(max_index);

    if invert {
        max_index - index
    } else {
        index
    }
}

/// Maps a sampled pixel buffer to a [`GlyphFrame`], stepping rows 2:1 to
/// compensate for glyphs being taller than wide.
pub struct GlyphMapper<'a> {
    palette: &'a GlyphPalette,
    options: &'a EffectOptions,
}

impl<'a> GlyphMapper<'a> {
    pub fn new(palette: &'a GlyphPalette, options: &'a EffectOptions) -> Self {
        Self { palette, options }
    }

    pub fn map_frame(&self, pixels: &RgbaImage) -> GlyphFrame {
        let (columns, rows) = pixels.dimensions();
        let emitted_rows = rows.div_ceil(2) as usize;
        let mut cells = Vec::with_capacity(columns as usize * emitted_rows);

        for y in (0..rows).step_by(2) {
            for x in 0..columns {
                let Rgba([red, green, blue, alpha]) = *pixels.get_pixel(x, y);
                cells.push(self.map_pixel(red, green, blue, alpha));
            }
        }

        GlyphFrame::new(columns, cells)
    }

    pub fn map_pixel(&self, red: u8, green: u8, blue: u8, alpha: u8) -> GlyphCell {
        let index = palette_index(
            brightness(red, green, blue, alpha),
            self.palette.len(),
            self.options.invert,
        );
        let glyph = self.palette.glyph(index).to_owned();

        if self.options.color {
            GlyphCell {
                glyph,
                color: Some([red, green, blue]),
                background: self.options.block.then_some([red, green, blue]),
                opacity: self.options.alpha.then(|| f32::from(alpha) / 255.0),
            }
        } else {
            GlyphCell::plain(glyph)
        }
    }
}
