use ::rustybuzz::{Face, UnicodeBuffer};

use crate::{Error, GlyphRun, ShapedGlyph, FIXED_POINT_SCALE};

/// Shaper bound to one face and size.
///
/// rustybuzz reports positions in font units. They are scaled to 26.6
/// fixed point at `ppem * 64` units per em, the same convention HarfBuzz
/// uses after `hb_font_set_scale`, and then converted to pixels.
pub struct ShaperInstance<'a> {
    face: Face<'a>,
    scale: f64,
}

impl<'a> ShaperInstance<'a> {
    pub fn new(data: &'a [u8], index: u32, ppem: u32) -> Option<Self> {
        let face = Face::from_slice(data, index)?;
        let upem = face.units_per_em() as f64;
        if upem <= 0.0 {
            return None;
        }
        let scale = ppem as f64 * FIXED_POINT_SCALE as f64 / upem;
        Some(Self { face, scale })
    }

    pub fn shape(&self, text: &str) -> Result<GlyphRun, Error> {
        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();
        let output = ::rustybuzz::shape(&self.face, &[], buffer);
        let infos = output.glyph_infos();
        let positions = output.glyph_positions();
        if infos.len() != positions.len() {
            return Err(Error::Shaping(format!(
                "shaper returned {} glyphs but {} positions",
                infos.len(),
                positions.len()
            )));
        }
        let glyphs: Vec<_> = infos
            .iter()
            .zip(positions)
            .map(|(info, pos)| ShapedGlyph {
                glyph_id: info.glyph_id,
                cluster: info.cluster,
                x_advance: self.to_pixels(pos.x_advance),
                y_advance: self.to_pixels(pos.y_advance),
                x_offset: self.to_pixels(pos.x_offset),
                y_offset: self.to_pixels(pos.y_offset),
            })
            .collect();
        let missing = glyphs.iter().filter(|glyph| glyph.glyph_id == 0).count();
        if missing != 0 {
            log::warn!("{missing} of {} glyphs are .notdef", glyphs.len());
        }
        log::debug!("shaped {} chars into {} glyphs", text.chars().count(), glyphs.len());
        Ok(GlyphRun::new(glyphs))
    }

    /// Font units to pixels, rounding through 26.6 fixed point.
    fn to_pixels(&self, units: i32) -> f32 {
        let fixed = (units as f64 * self.scale).round();
        (fixed / FIXED_POINT_SCALE as f64) as f32
    }
}
