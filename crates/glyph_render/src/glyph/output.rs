use crate::metrics::FontMetrics;

/// Stand-in for the DOM container the effect writes into.
///
/// Holds the container layout style and the current markup contents. The
/// contents are fully replaced on every render, never patched, so each
/// frame's output is complete and self-consistent.
#[derive(Clone, Debug)]
pub struct OutputElement {
    metrics: FontMetrics,
    width: u32,
    height: u32,
    contents: String,
}

impl OutputElement {
    pub(crate) fn new(metrics: FontMetrics) -> Self {
        Self { metrics, width: 0, height: 0, contents: String::new() }
    }

    pub(crate) fn set_layout(&mut self, metrics: FontMetrics, width: u32, height: u32) {
        self.metrics = metrics;
        self.width = width;
        self.height = height;
    }

    pub(crate) fn replace(&mut self, contents: String) {
        self.contents = contents;
    }

    /// Current markup contents; empty until the first non-degenerate render.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Inline style making glyph rows tile the output area without wrapping.
    pub fn container_css(&self) -> String {
        format!(
            "white-space:pre;margin:0px;padding:0px;letter-spacing:{}px;\
             font-family:courier new, monospace;font-size:{}px;line-height:{}px;\
             text-align:left;text-decoration:none",
            self.metrics.letter_spacing, self.metrics.font_size, self.metrics.line_height
        )
    }

    /// Contents wrapped in a styled container, ready to insert into a page.
    pub fn to_document(&self) -> String {
        format!("<div style=\"{}\">{}</div>", self.container_css(), self.contents)
    }
}
