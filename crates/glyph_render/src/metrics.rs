/// Letter-spacing correction profile for the monospace output font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextResolution {
    #[default]
    Low,
    Medium,
    High,
}

/// Layout metrics applied to the output container so glyph rows tile the
/// requested pixel area edge to edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub font_size: f32,
    pub line_height: f32,
    pub letter_spacing: f32,
}

impl FontMetrics {
    /// Pure derivation from the effect configuration:
    /// `font_size = line_height = (2 / resolution) * scale`.
    pub fn derive(resolution: f32, scale: f32, text_resolution: TextResolution) -> Self {
        let size = (2.0 / resolution) * scale;
        Self {
            font_size: size,
            line_height: size,
            letter_spacing: letter_spacing(text_resolution, scale),
        }
    }
}

/// Empirical horizontal compression (in px) that makes monospace glyphs tile
/// edge to edge at the given profile and scale. Tuned values, keyed by the
/// scale rounded to 1..=5; anything outside the table falls back to 0.
pub fn letter_spacing(text_resolution: TextResolution, scale: f32) -> f32 {
    match (text_resolution, scale.round() as i32) {
        (TextResolution::Low, 1) => -1.0,
        (TextResolution::Low, 2 | 3) => -2.1,
        (TextResolution::Low, 4) => -3.1,
        (TextResolution::Low, 5) => -4.15,
        (TextResolution::Medium, 1) => 0.0,
        (TextResolution::Medium, 2) => -1.0,
        (TextResolution::Medium, 3) => -1.04,
        (TextResolution::Medium, 4 | 5) => -2.1,
        (TextResolution::High, 1 | 2) => 0.0,
        (TextResolution::High, 3 | 4 | 5) => -1.0,
        _ => 0.0,
    }
}
