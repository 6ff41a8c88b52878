//! End-to-end tests for the glyph effect driven by an image-backed surface:
//! sizing, row skipping, degenerate sizes, markup assembly, and the color
//! style branches.

use glyph_render::{
    EffectError, EffectOptions, GlyphEffect, ImageSurface, RenderSurface,
};
use image::{Rgba, RgbaImage};

fn solid_surface(width: u32, height: u32, pixel: [u8; 4]) -> ImageSurface {
    ImageSurface::from_raster(RgbaImage::from_pixel(width, height, Rgba(pixel)))
}

fn effect_with(
    surface: ImageSurface,
    options: EffectOptions,
    width: u32,
    height: u32,
) -> GlyphEffect<ImageSurface> {
    let mut effect = GlyphEffect::new(surface, options).expect("image surface supports readback");
    effect.set_size(width, height);
    effect
}

// ==================== Sizing ====================

#[test]
fn sample_grid_is_floor_of_scaled_dimensions() {
    let mut effect = effect_with(
        solid_surface(4, 4, [255, 255, 255, 255]),
        EffectOptions::default(),
        1000,
        800,
    );
    assert_eq!(effect.sample_dimensions(), (150, 120));

    // Repeated calls with the same size keep the same grid.
    effect.set_size(1000, 800);
    assert_eq!(effect.sample_dimensions(), (150, 120));

    effect.set_size(10, 10);
    assert_eq!(effect.sample_dimensions(), (1, 1));
}

#[test]
fn rows_are_stepped_two_to_one() {
    let options = EffectOptions { resolution: 1.0, ..Default::default() };

    let mut odd = effect_with(solid_surface(5, 5, [0, 0, 0, 255]), options.clone(), 5, 5);
    odd.render(&(), &());
    let frame = odd.frame().expect("frame rendered");
    assert_eq!(frame.columns(), 5);
    assert_eq!(frame.row_count(), 3); // ceil(5 / 2)

    let mut even = effect_with(solid_surface(6, 6, [0, 0, 0, 255]), options, 6, 6);
    even.render(&(), &());
    assert_eq!(even.frame().expect("frame rendered").row_count(), 3); // ceil(6 / 2)
}

#[test]
fn zero_area_output_renders_no_glyphs() {
    let options = EffectOptions { resolution: 1.0, ..Default::default() };

    let mut effect = effect_with(solid_surface(4, 4, [0, 0, 0, 255]), options.clone(), 0, 10);
    effect.render(&(), &());
    assert!(effect.frame().is_none());
    assert_eq!(effect.output().contents(), "");

    let mut effect = effect_with(solid_surface(4, 4, [0, 0, 0, 255]), options.clone(), 10, 0);
    effect.render(&(), &());
    assert!(effect.frame().is_none());
    assert_eq!(effect.output().contents(), "");

    // Never sized at all behaves the same way.
    let mut unsized_effect =
        GlyphEffect::new(solid_surface(4, 4, [0, 0, 0, 255]), options).expect("constructible");
    unsized_effect.render(&(), &());
    assert!(unsized_effect.frame().is_none());
}

// ==================== Markup assembly ====================

#[test]
fn render_is_deterministic() {
    let options = EffectOptions { resolution: 1.0, color: true, ..Default::default() };
    let mut effect = effect_with(solid_surface(3, 4, [40, 90, 200, 255]), options, 3, 4);

    effect.render(&(), &());
    let first = effect.output().contents().to_owned();
    effect.render(&(), &());
    assert_eq!(effect.output().contents(), first);
}

#[test]
fn spaces_are_emitted_as_non_breaking() {
    // A white frame maps to the palette's space glyph on every cell.
    let options = EffectOptions { resolution: 1.0, ..Default::default() };
    let mut effect = effect_with(solid_surface(4, 4, [255, 255, 255, 255]), options, 4, 4);
    effect.render(&(), &());

    let contents = effect.output().contents();
    assert!(contents.contains("&nbsp;"));
    assert!(!contents.contains(' '), "literal spaces must never reach the markup");
}

#[test]
fn colored_spaces_are_also_non_breaking() {
    let options = EffectOptions { resolution: 1.0, color: true, ..Default::default() };
    let mut effect = effect_with(solid_surface(2, 2, [255, 255, 255, 255]), options, 2, 2);
    effect.render(&(), &());

    let contents = effect.output().contents();
    assert!(contents.contains(">&nbsp;</span>"));
}

#[test]
fn snapshot_wrapper_matches_output_area() {
    let options = EffectOptions { resolution: 1.0, ..Default::default() };
    let mut effect = effect_with(solid_surface(6, 4, [0, 0, 0, 255]), options, 6, 4);
    effect.render(&(), &());

    let contents = effect.output().contents();
    assert!(contents
        .starts_with("<div style=\"display:block;width:6px;height:4px;overflow:hidden\">"));
    assert!(contents.ends_with("</div>"));
    assert_eq!(contents.matches("<br/>").count(), 2);
}

#[test]
fn dark_frame_uses_most_ink_glyph() {
    let options = EffectOptions { resolution: 1.0, ..Default::default() };
    let mut effect = effect_with(solid_surface(2, 2, [0, 0, 0, 255]), options, 2, 2);
    effect.render(&(), &());

    // Detailed default ramp ends in '@'.
    assert!(effect.output().contents().contains('@'));
}

#[test]
fn invert_swaps_ink_direction() {
    let options = EffectOptions { resolution: 1.0, invert: true, ..Default::default() };
    let mut effect = effect_with(solid_surface(2, 2, [0, 0, 0, 255]), options, 2, 2);
    effect.render(&(), &());

    // Black with invert lands on the space end of the ramp.
    let contents = effect.output().contents();
    assert!(contents.contains("&nbsp;"));
    assert!(!contents.contains('@'));
}

#[test]
fn transparent_pixels_render_as_background() {
    let options = EffectOptions { resolution: 1.0, ..Default::default() };
    let mut effect = effect_with(solid_surface(2, 2, [200, 0, 0, 0]), options, 2, 2);
    effect.render(&(), &());

    // Same rendition as a white frame, despite the red channel.
    assert!(effect.output().contents().contains("&nbsp;"));
    assert!(!effect.output().contents().contains('@'));
}

// ==================== Color styling ====================

#[test]
fn color_block_alpha_compose_into_one_span() {
    let options = EffectOptions {
        resolution: 1.0,
        color: true,
        block: true,
        alpha: true,
        ..Default::default()
    };
    let mut effect = effect_with(solid_surface(2, 2, [10, 20, 30, 128]), options, 2, 2);
    effect.render(&(), &());

    let contents = effect.output().contents();
    assert!(contents.contains("color:rgb(10,20,30);"));
    assert!(contents.contains("background-color:rgb(10,20,30);"));
    assert!(contents.contains(&format!("opacity:{};", 128.0_f32 / 255.0)));
}

#[test]
fn color_mode_without_block_or_alpha_stays_minimal() {
    let options = EffectOptions { resolution: 1.0, color: true, ..Default::default() };
    let mut effect = effect_with(solid_surface(2, 2, [10, 20, 30, 128]), options, 2, 2);
    effect.render(&(), &());

    let contents = effect.output().contents();
    assert!(contents.contains("<span style='color:rgb(10,20,30);'>"));
    assert!(!contents.contains("background-color"));
    assert!(!contents.contains("opacity"));
}

#[test]
fn monochrome_mode_emits_no_spans() {
    let options = EffectOptions { resolution: 1.0, ..Default::default() };
    let mut effect = effect_with(solid_surface(2, 2, [10, 20, 30, 128]), options, 2, 2);
    effect.render(&(), &());

    assert!(!effect.output().contents().contains("<span"));
}

// ==================== Container styling ====================

#[test]
fn container_css_reflects_derived_metrics() {
    let options = EffectOptions { resolution: 0.2, scale: 2.0, ..Default::default() };
    let mut effect = effect_with(solid_surface(4, 4, [0, 0, 0, 255]), options, 100, 100);
    effect.render(&(), &());

    let css = effect.output().container_css();
    assert!(css.contains("white-space:pre"));
    assert!(css.contains("font-size:20px"));
    assert!(css.contains("line-height:20px"));
    assert!(css.contains("letter-spacing:-2.1px"));
    assert!(css.contains("font-family:courier new, monospace"));

    let document = effect.output().to_document();
    assert!(document.contains(&css));
    assert!(document.contains(effect.output().contents()));
}

// ==================== Construction failure ====================

struct OpaqueSurface {
    raster: RgbaImage,
}

impl RenderSurface for OpaqueSurface {
    type Scene = ();
    type Camera = ();

    fn readback_supported(&self) -> bool {
        false
    }

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn draw(&mut self, _scene: &(), _camera: &()) -> &RgbaImage {
        &self.raster
    }
}

#[test]
fn surfaces_without_readback_are_rejected_at_construction() {
    let surface = OpaqueSurface { raster: RgbaImage::new(1, 1) };
    let result = GlyphEffect::new(surface, EffectOptions::default());
    assert!(matches!(result, Err(EffectError::EnvironmentUnsupported)));
}
