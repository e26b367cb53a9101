//! Helpers shared by the unit tests.
//!
//! [`monospace_font`] assembles a minimal TrueType font in memory: 1000
//! units per em, every glyph advancing by 600 units.
//!
//! | gid | char | outline |
//! | --- | ---- | ------- |
//! | 0 | | empty `.notdef` |
//! | 1 | `A` | rectangle (50, 0) to (550, 700) |
//! | 2 | `B` | same extent, right side is a quadratic curve |
//! | 3 | space | empty |

use std::collections::{BTreeMap, HashMap};

use skrifa::outline::{pen::PathElement, OutlinePen};

use crate::{Error, OutlineSource};

pub const GID_A: u32 = 1;
pub const GID_B: u32 = 2;
pub const GID_SPACE: u32 = 3;

pub const UPEM: u16 = 1000;
pub const ADVANCE: u16 = 600;

const NUM_GLYPHS: u16 = 4;

/// A point in a simple glyph.
struct Point {
    x: i16,
    y: i16,
    on_curve: bool,
}

fn point(x: i16, y: i16) -> Point {
    Point {
        x,
        y,
        on_curve: true,
    }
}

fn off(x: i16, y: i16) -> Point {
    Point {
        x,
        y,
        on_curve: false,
    }
}

#[derive(Default)]
struct Writer(Vec<u8>);

impl Writer {
    fn u8(&mut self, v: u8) -> &mut Self {
        self.0.push(v);
        self
    }

    fn u16(&mut self, v: u16) -> &mut Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }

    fn i16(&mut self, v: i16) -> &mut Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }

    fn u32(&mut self, v: u32) -> &mut Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }

    fn i64(&mut self, v: i64) -> &mut Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }

    fn pad4(&mut self) -> &mut Self {
        while self.0.len() % 4 != 0 {
            self.0.push(0);
        }
        self
    }
}

/// Encodes a single contour glyph with long coordinate deltas.
fn simple_glyph(points: &[Point]) -> Vec<u8> {
    let x_min = points.iter().map(|p| p.x).min().unwrap_or_default();
    let y_min = points.iter().map(|p| p.y).min().unwrap_or_default();
    let x_max = points.iter().map(|p| p.x).max().unwrap_or_default();
    let y_max = points.iter().map(|p| p.y).max().unwrap_or_default();
    let mut w = Writer::default();
    w.i16(1) // numberOfContours
        .i16(x_min)
        .i16(y_min)
        .i16(x_max)
        .i16(y_max)
        .u16(points.len() as u16 - 1) // endPtsOfContours[0]
        .u16(0); // instructionLength
    for p in points {
        w.u8(p.on_curve as u8);
    }
    let mut last = 0;
    for p in points {
        w.i16(p.x - last);
        last = p.x;
    }
    let mut last = 0;
    for p in points {
        w.i16(p.y - last);
        last = p.y;
    }
    w.pad4();
    w.0
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn glyphs() -> [Vec<u8>; NUM_GLYPHS as usize] {
    [
        vec![],
        simple_glyph(&[point(50, 0), point(50, 700), point(550, 700), point(550, 0)]),
        simple_glyph(&[point(50, 0), point(50, 700), off(550, 700), point(550, 0)]),
        vec![],
    ]
}

/// Returns the bytes of the test font.
pub fn monospace_font() -> Vec<u8> {
    build_font(&glyphs())
}

/// Returns the test font with the contour end point of `A` pointing far
/// past its point data, so that drawing it fails.
pub fn corrupt_outline_font() -> Vec<u8> {
    let mut glyphs = glyphs();
    // endPtsOfContours[0] follows numberOfContours and the bounding box
    glyphs[GID_A as usize][10..12].copy_from_slice(&0xFFF0u16.to_be_bytes());
    build_font(&glyphs)
}

fn build_font(glyphs: &[Vec<u8>]) -> Vec<u8> {
    let mut tables: BTreeMap<&[u8; 4], Vec<u8>> = BTreeMap::new();

    let mut glyf = Writer::default();
    let mut loca = Writer::default();
    for glyph in glyphs {
        loca.u32(glyf.0.len() as u32);
        glyf.0.extend_from_slice(glyph);
    }
    loca.u32(glyf.0.len() as u32);
    tables.insert(b"glyf", glyf.0);
    tables.insert(b"loca", loca.0);

    let mut head = Writer::default();
    head.u16(1)
        .u16(0)
        .u32(0x00010000) // fontRevision
        .u32(0) // checksumAdjustment
        .u32(0x5F0F3CF5) // magicNumber
        .u16(0b11) // flags
        .u16(UPEM)
        .i64(0) // created
        .i64(0) // modified
        .i16(50)
        .i16(0)
        .i16(550)
        .i16(700)
        .u16(0) // macStyle
        .u16(8) // lowestRecPPEM
        .i16(2) // fontDirectionHint
        .i16(1) // indexToLocFormat: long offsets
        .i16(0); // glyphDataFormat
    tables.insert(b"head", head.0);

    let mut hhea = Writer::default();
    hhea.u32(0x00010000)
        .i16(800) // ascender
        .i16(-200) // descender
        .i16(0) // lineGap
        .u16(ADVANCE)
        .i16(0) // minLeftSideBearing
        .i16(50) // minRightSideBearing
        .i16(550) // xMaxExtent
        .i16(1) // caretSlopeRise
        .i16(0) // caretSlopeRun
        .i16(0) // caretOffset
        .i16(0)
        .i16(0)
        .i16(0)
        .i16(0)
        .i16(0) // metricDataFormat
        .u16(NUM_GLYPHS);
    tables.insert(b"hhea", hhea.0);

    let mut hmtx = Writer::default();
    for lsb in [0, 50, 50, 0] {
        hmtx.u16(ADVANCE).i16(lsb);
    }
    tables.insert(b"hmtx", hmtx.0);

    let mut maxp = Writer::default();
    maxp.u32(0x00010000)
        .u16(NUM_GLYPHS)
        .u16(4) // maxPoints
        .u16(1) // maxContours
        .u16(0) // maxCompositePoints
        .u16(0) // maxCompositeContours
        .u16(2) // maxZones
        .u16(0) // maxTwilightPoints
        .u16(0) // maxStorage
        .u16(0) // maxFunctionDefs
        .u16(0) // maxInstructionDefs
        .u16(0) // maxStackElements
        .u16(0) // maxSizeOfInstructions
        .u16(0) // maxComponentElements
        .u16(0); // maxComponentDepth
    tables.insert(b"maxp", maxp.0);

    // Windows full repertoire encoding with a single format 12 subtable
    let groups: [(u32, u32, u32); 2] = [(0x20, 0x20, GID_SPACE), (0x41, 0x42, GID_A)];
    let mut cmap = Writer::default();
    cmap.u16(0) // version
        .u16(1) // numTables
        .u16(3) // platformID
        .u16(10) // encodingID
        .u32(12) // subtableOffset
        .u16(12) // format
        .u16(0) // reserved
        .u32(16 + 12 * groups.len() as u32)
        .u32(0) // language
        .u32(groups.len() as u32);
    for (start, end, gid) in groups {
        cmap.u32(start).u32(end).u32(gid);
    }
    tables.insert(b"cmap", cmap.0);

    let num_tables = tables.len() as u16;
    let entry_selector = 15 - num_tables.leading_zeros() as u16;
    let search_range = (1u16 << entry_selector) * 16;
    let mut font = Writer::default();
    font.u32(0x00010000)
        .u16(num_tables)
        .u16(search_range)
        .u16(entry_selector)
        .u16(num_tables * 16 - search_range);
    let mut offset = 12 + 16 * tables.len() as u32;
    for (tag, data) in &tables {
        font.0.extend_from_slice(*tag);
        font.u32(checksum(data)).u32(offset).u32(data.len() as u32);
        offset += (data.len() as u32).next_multiple_of(4);
    }
    for data in tables.values() {
        font.0.extend_from_slice(data);
        font.pad4();
    }
    font.0
}

/// Outline source that replays prerecorded elements, in 26.6 units.
#[derive(Default)]
pub struct RecordedOutlines(pub HashMap<u32, Vec<PathElement>>);

impl OutlineSource for RecordedOutlines {
    fn draw_outline(&self, glyph_id: u32, pen: &mut impl OutlinePen) -> Result<bool, Error> {
        let Some(elements) = self.0.get(&glyph_id) else {
            return Ok(false);
        };
        for element in elements {
            match *element {
                PathElement::MoveTo { x, y } => pen.move_to(x, y),
                PathElement::LineTo { x, y } => pen.line_to(x, y),
                PathElement::QuadTo { cx0, cy0, x, y } => pen.quad_to(cx0, cy0, x, y),
                PathElement::CurveTo {
                    cx0,
                    cy0,
                    cx1,
                    cy1,
                    x,
                    y,
                } => pen.curve_to(cx0, cy0, cx1, cy1, x, y),
                PathElement::Close => pen.close(),
            }
        }
        Ok(true)
    }
}

/// Axis aligned rectangle in pixels, converted to 26.6 units.
pub fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<PathElement> {
    let s = crate::FIXED_POINT_SCALE;
    vec![
        PathElement::MoveTo { x: x0 * s, y: y0 * s },
        PathElement::LineTo { x: x0 * s, y: y1 * s },
        PathElement::LineTo { x: x1 * s, y: y1 * s },
        PathElement::LineTo { x: x1 * s, y: y0 * s },
        PathElement::Close,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use skrifa::{raw::TableProvider, FontRef, MetadataProvider};

    #[test]
    fn font_parses() {
        let data = monospace_font();
        let font = FontRef::new(&data).unwrap();
        assert_eq!(font.head().unwrap().units_per_em(), UPEM);
        assert_eq!(font.maxp().unwrap().num_glyphs(), NUM_GLYPHS);
        let charmap = font.charmap();
        assert_eq!(charmap.map('A').map(|gid| gid.to_u32()), Some(GID_A));
        assert_eq!(charmap.map('B').map(|gid| gid.to_u32()), Some(GID_B));
        assert_eq!(charmap.map(' ').map(|gid| gid.to_u32()), Some(GID_SPACE));
        assert!(rustybuzz::Face::from_slice(&data, 0).is_some());
    }
}
