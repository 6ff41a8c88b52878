mod glyph;
mod metrics;
mod raster;

use log::debug;

pub use glyph::{
    frame::{GlyphCell, GlyphFrame},
    mapping::{brightness, luminance, palette_index, GlyphMapper},
    markup,
    output::OutputElement,
    palette::GlyphPalette,
};
pub use metrics::{letter_spacing, FontMetrics, TextResolution};
pub use raster::{
    sampler::SampleGrid,
    surface::{ImageSurface, RenderSurface},
};

#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    #[error("render surface does not support pixel readback")]
    EnvironmentUnsupported,
}

#[derive(Clone, Debug)]
pub struct EffectOptions {
    /// Fraction of the source pixel dimensions sampled into the glyph grid.
    pub resolution: f32,
    /// Font size / line height multiplier; also selects the spacing tuning row.
    pub scale: f32,
    /// Emit per-glyph foreground colors taken from the sampled pixel.
    pub color: bool,
    /// Emit per-glyph opacity from the sampled alpha channel (color mode only).
    pub alpha: bool,
    /// Paint a background block behind each glyph (color mode only).
    pub block: bool,
    /// Reverse the brightness to palette-index mapping.
    pub invert: bool,
    /// Letter-spacing correction profile for the monospace output font.
    pub text_resolution: TextResolution,
    /// Explicit glyph palette; `None` picks a default based on `color`.
    pub palette: Option<GlyphPalette>,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            resolution: 0.15,
            scale: 1.0,
            color: false,
            alpha: false,
            block: false,
            invert: false,
            text_resolution: TextResolution::Low,
            palette: None,
        }
    }
}

impl EffectOptions {
    /// Palette the effect will actually render with. An explicit palette
    /// always wins; otherwise color mode gets the short color ramp and
    /// monochrome mode the detailed ramp.
    pub fn effective_palette(&self) -> GlyphPalette {
        match &self.palette {
            Some(palette) => palette.clone(),
            None if self.color => GlyphPalette::color_default(),
            None => GlyphPalette::detailed(),
        }
    }
}

/// Converts rendered raster frames into a styled glyph-grid snapshot.
///
/// The effect owns its output element and fully rewrites its contents on
/// every [`render`](GlyphEffect::render) call; the caller owns the frame
/// loop and the placement of the output.
pub struct GlyphEffect<S> {
    surface: S,
    options: EffectOptions,
    palette: GlyphPalette,
    metrics: FontMetrics,
    sampler: SampleGrid,
    output: OutputElement,
    frame: Option<GlyphFrame>,
    width: u32,
    height: u32,
    columns: u32,
    rows: u32,
}

impl<S: RenderSurface> GlyphEffect<S> {
    pub fn new(surface: S, options: EffectOptions) -> Result<Self, EffectError> {
        if !surface.readback_supported() {
            return Err(EffectError::EnvironmentUnsupported);
        }

        let palette = options.effective_palette();
        let metrics =
            FontMetrics::derive(options.resolution, options.scale, options.text_resolution);

        Ok(Self {
            surface,
            options,
            palette,
            metrics,
            sampler: SampleGrid::new(),
            output: OutputElement::new(metrics),
            frame: None,
            width: 0,
            height: 0,
            columns: 0,
            rows: 0,
        })
    }

    /// Set the output area in pixels, resizing the backing surface and
    /// re-deriving the sample grid as `floor(dimension * resolution)`.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.surface.resize(width, height);

        self.columns = (width as f32 * self.options.resolution).floor() as u32;
        self.rows = (height as f32 * self.options.resolution).floor() as u32;
        self.sampler.resize(self.columns, self.rows);

        self.output.set_layout(self.metrics, width, height);
    }

    /// Draw one frame and rewrite the output element with its glyph
    /// rendition. With a collapsed sample grid the surface still draws (the
    /// scene advances) but glyph assembly is skipped.
    pub fn render(&mut self, scene: &S::Scene, camera: &S::Camera) {
        let raster = self.surface.draw(scene, camera);

        if self.columns == 0 || self.rows == 0 {
            debug!("skipping glyph pass for empty {}x{} sample grid", self.columns, self.rows);
            return;
        }

        let sampled = self.sampler.downsample(raster);
        let frame = GlyphMapper::new(&self.palette, &self.options).map_frame(sampled);
        self.output.replace(markup::snapshot(&frame, self.width, self.height));
        self.frame = Some(frame);
    }

    /// Derived sample-grid dimensions (columns, rows).
    pub fn sample_dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    pub fn output(&self) -> &OutputElement {
        &self.output
    }

    /// Structured snapshot of the last rendered frame, if any.
    pub fn frame(&self) -> Option<&GlyphFrame> {
        self.frame.as_ref()
    }

    pub fn options(&self) -> &EffectOptions {
        &self.options
    }

    pub fn palette(&self) -> &GlyphPalette {
        &self.palette
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }
}
