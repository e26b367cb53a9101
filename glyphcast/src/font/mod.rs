use std::path::Path;

use ::skrifa::{outline::OutlinePen, raw::FileRef, FontRef};

use crate::{
    render::{render_run, Rendering},
    Error, GlyphRun,
};

mod rustybuzz;
mod skrifa;

pub use self::rustybuzz::ShaperInstance;
pub use self::skrifa::OutlineInstance;

/// Provider of glyph outlines.
///
/// Implementations emit the outline of a glyph to `pen` in 26.6 units
/// (see [`FIXED_POINT_SCALE`](crate::FIXED_POINT_SCALE)) with Y pointing
/// up. A glyph without contours emits nothing.
pub trait OutlineSource {
    /// Draws the outline of `glyph_id`, returning `false` if the source has
    /// no outline for that glyph.
    fn draw_outline(&self, glyph_id: u32, pen: &mut impl OutlinePen) -> Result<bool, Error>;
}

/// Font data loaded into memory.
pub struct Font {
    origin: String,
    data: Vec<u8>,
    index: u32,
}

impl Font {
    /// Reads the font at `path`, selecting the face at `index` for
    /// collections.
    pub fn load(path: impl AsRef<Path>, index: u32) -> Result<Self, Error> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let data = std::fs::read(path).map_err(|e| Error::FontLoad {
            origin: origin.clone(),
            reason: e.to_string(),
        })?;
        Self::with_origin(origin, data, index)
    }

    /// Wraps font data that is already in memory.
    pub fn from_data(data: Vec<u8>, index: u32) -> Result<Self, Error> {
        Self::with_origin("<memory>".into(), data, index)
    }

    fn with_origin(origin: String, data: Vec<u8>, index: u32) -> Result<Self, Error> {
        let count = match FileRef::new(&data) {
            Ok(FileRef::Font(_)) => 1,
            Ok(FileRef::Collection(collection)) => collection.len(),
            Err(e) => {
                return Err(Error::FontLoad {
                    origin,
                    reason: e.to_string(),
                })
            }
        };
        if index >= count {
            return Err(Error::FontLoad {
                origin,
                reason: format!("face index {index} is out of range (file has {count})"),
            });
        }
        log::info!("loaded {origin} ({} bytes, face {index})", data.len());
        Ok(Self {
            origin,
            data,
            index,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Binds the shaper and outline source at the given pixels per em.
    pub fn instance(&self, ppem: u32) -> Result<FontInstance<'_>, Error> {
        if ppem == 0 {
            return Err(Error::InvalidSize(ppem));
        }
        let font_ref = FontRef::from_index(&self.data, self.index).map_err(|e| self.load_error(e))?;
        let shaper = ShaperInstance::new(&self.data, self.index, ppem)
            .ok_or_else(|| self.load_error("face was rejected by the shaper"))?;
        let outlines = OutlineInstance::new(&font_ref, ppem);
        Ok(FontInstance {
            ppem,
            shaper,
            outlines,
        })
    }

    fn load_error(&self, reason: impl ToString) -> Error {
        Error::FontLoad {
            origin: self.origin.clone(),
            reason: reason.to_string(),
        }
    }
}

/// A font bound to a size, ready to shape and draw.
pub struct FontInstance<'a> {
    ppem: u32,
    shaper: ShaperInstance<'a>,
    outlines: OutlineInstance<'a>,
}

impl FontInstance<'_> {
    pub fn ppem(&self) -> u32 {
        self.ppem
    }

    /// Shapes `text` into a run of positioned glyphs.
    pub fn shape(&self, text: &str) -> Result<GlyphRun, Error> {
        self.shaper.shape(text)
    }

    /// Shapes and rasterizes `text`.
    pub fn render(&self, text: &str) -> Result<Rendering, Error> {
        let run = self.shape(text)?;
        render_run(&run, self)
    }
}

impl OutlineSource for FontInstance<'_> {
    fn draw_outline(&self, glyph_id: u32, pen: &mut impl OutlinePen) -> Result<bool, Error> {
        self.outlines.draw_outline(glyph_id, pen)
    }
}
