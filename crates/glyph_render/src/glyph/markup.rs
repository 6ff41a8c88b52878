//! Markup assembly for glyph frames.
//!
//! A frame becomes one immutable snapshot string per render; the consumer
//! owns where and how it is displayed.

use super::frame::{GlyphCell, GlyphFrame};

pub const LINE_BREAK: &str = "<br/>";

/// Substitute for plain spaces so layout engines do not collapse them.
/// Applied in both the color and monochrome branches.
pub const NON_BREAKING_SPACE: &str = "&nbsp;";

fn glyph_text(glyph: &str) -> &str {
    if glyph == " " {
        NON_BREAKING_SPACE
    } else {
        glyph
    }
}

/// Markup fragment for a single cell: the bare glyph in monochrome mode, an
/// inline-styled span in color mode.
pub fn cell_markup(cell: &GlyphCell) -> String {
    let glyph = glyph_text(&cell.glyph);

    let Some([red, green, blue]) = cell.color else {
        return glyph.to_owned();
    };

    let mut style = format!("color:rgb({red},{green},{blue});");
    if let Some([red, green, blue]) = cell.background {
        style.push_str(&format!("background-color:rgb({red},{green},{blue});"));
    }
    if let Some(opacity) = cell.opacity {
        style.push_str(&format!("opacity:{opacity};"));
    }

    format!("<span style='{style}'>{glyph}</span>")
}

/// All rows of a frame, each terminated by a line-break marker.
pub fn rows_markup(frame: &GlyphFrame) -> String {
    let mut out = String::new();
    for row in frame.rows() {
        for cell in row {
            out.push_str(&cell_markup(cell));
        }
        out.push_str(LINE_BREAK);
    }
    out
}

/// Complete snapshot: assembled rows inside a single wrapper block sized to
/// the configured output area, overflow hidden.
pub fn snapshot(frame: &GlyphFrame, width: u32, height: u32) -> String {
    format!(
        "<div style=\"display:block;width:{width}px;height:{height}px;overflow:hidden\">{}</div>",
        rows_markup(frame)
    )
}
