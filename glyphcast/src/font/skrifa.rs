use ::skrifa::{
    instance::{LocationRef, Size},
    outline::{DrawSettings, OutlinePen},
    FontRef, GlyphId, MetadataProvider, OutlineGlyphCollection,
};

use super::OutlineSource;
use crate::{Error, FIXED_POINT_SCALE};

/// Unhinted outlines scaled to 26.6 units.
pub struct OutlineInstance<'a> {
    outlines: OutlineGlyphCollection<'a>,
    size: Size,
}

impl<'a> OutlineInstance<'a> {
    pub fn new(font: &FontRef<'a>, ppem: u32) -> Self {
        Self {
            outlines: font.outline_glyphs(),
            size: Size::new(ppem as f32 * FIXED_POINT_SCALE),
        }
    }
}

impl OutlineSource for OutlineInstance<'_> {
    fn draw_outline(&self, glyph_id: u32, pen: &mut impl OutlinePen) -> Result<bool, Error> {
        let Some(outline) = self.outlines.get(GlyphId::new(glyph_id)) else {
            return Ok(false);
        };
        outline
            .draw(DrawSettings::unhinted(self.size, LocationRef::default()), pen)
            .map_err(|e| Error::Shaping(format!("failed to draw glyph {glyph_id}: {e}")))?;
        Ok(true)
    }
}
