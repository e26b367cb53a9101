//! Output of the shaping stage.

use serde::Serialize;

/// A single positioned glyph.
///
/// Advances and offsets are in pixels, already converted from the shaper's
/// 26.6 fixed point representation.
#[derive(Copy, Clone, PartialEq, Default, Debug, Serialize)]
pub struct ShapedGlyph {
    /// Glyph identifier in the font.
    pub glyph_id: u32,
    /// Byte offset of the cluster in the source text.
    pub cluster: u32,
    pub x_advance: f32,
    pub y_advance: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

/// Glyph together with the origin of its outline in line space.
///
/// Line space has Y pointing down, with the baseline of the first glyph at
/// `y == 0`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GlyphPlacement {
    pub glyph: ShapedGlyph,
    pub origin_x: f32,
    pub origin_y: f32,
}

/// Ordered sequence of glyphs produced by shaping one buffer of text.
#[derive(Clone, PartialEq, Default, Debug, Serialize)]
pub struct GlyphRun {
    glyphs: Vec<ShapedGlyph>,
}

impl GlyphRun {
    pub fn new(glyphs: Vec<ShapedGlyph>) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &[ShapedGlyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Returns an iterator over the glyphs paired with their origins.
    ///
    /// The cursor starts at (0, 0) and moves by each glyph's advance after
    /// the glyph is placed. The glyph's own offset is applied on top of the
    /// cursor. Offsets and advances are Y-up so the vertical component is
    /// negated to land in line space.
    pub fn placements(&self) -> impl Iterator<Item = GlyphPlacement> + '_ {
        let mut cursor_x = 0.0f32;
        let mut cursor_y = 0.0f32;
        self.glyphs.iter().map(move |glyph| {
            let placement = GlyphPlacement {
                glyph: *glyph,
                origin_x: cursor_x + glyph.x_offset,
                origin_y: -(cursor_y + glyph.y_offset),
            };
            cursor_x += glyph.x_advance;
            cursor_y += glyph.y_advance;
            placement
        })
    }

    /// Total advance of the run in pixels.
    pub fn advance(&self) -> (f32, f32) {
        self.glyphs.iter().fold((0.0, 0.0), |(x, y), glyph| {
            (x + glyph.x_advance, y + glyph.y_advance)
        })
    }
}
