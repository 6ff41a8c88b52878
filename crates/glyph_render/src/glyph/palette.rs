/// Ordered glyph ramp, index 0 carrying the least "ink".
///
/// Entries are strings rather than single characters so callers can supply
/// multi-character glyphs such as HTML entities. The palette is immutable
/// once constructed; no minimum length is enforced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphPalette {
    glyphs: Vec<String>,
}

impl GlyphPalette {
    pub fn new<I, G>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<String>,
    {
        Self { glyphs: glyphs.into_iter().map(Into::into).collect() }
    }

    /// One palette entry per code point of `charset`.
    pub fn from_charset(charset: &str) -> Self {
        Self { glyphs: charset.chars().map(String::from).collect() }
    }

    /// The 10-glyph ramp used as the documented constructor default.
    pub fn standard() -> Self {
        Self::from_charset(" .:-=+*#%@")
    }

    /// The 15-glyph ramp used when no palette is given and color is off.
    pub fn detailed() -> Self {
        Self::from_charset(" .,:;i1tfLCG08@")
    }

    /// The 7-glyph ramp used when no palette is given and color is on.
    pub fn color_default() -> Self {
        Self::from_charset(" CGO08@")
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// Glyph at `index`, clamped to the last entry. Empty palettes yield an
    /// empty glyph rather than a panic.
    pub fn glyph(&self, index: usize) -> &str {
        if self.glyphs.is_empty() {
            return "";
        }
        self.glyphs[index.min(self.glyphs.len() - 1)].as_str()
    }
}

impl From<&str> for GlyphPalette {
    fn from(charset: &str) -> Self {
        Self::from_charset(charset)
    }
}

impl From<Vec<String>> for GlyphPalette {
    fn from(glyphs: Vec<String>) -> Self {
        Self { glyphs }
    }
}
