use skrifa::outline::OutlinePen;

use crate::sink::PathSink;

/// Number of outline units per pixel.
///
/// Outlines are requested at 64 times the target size so every callback
/// coordinate is a 26.6 fixed point value, matching the units used for
/// shaper advances and offsets.
pub const FIXED_POINT_SCALE: f32 = 64.0;

/// Axis aligned box in line space.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    /// A box containing nothing. Including any point makes it non-empty.
    pub const EMPTY: Self = Self {
        min_x: f32::INFINITY,
        min_y: f32::INFINITY,
        max_x: f32::NEG_INFINITY,
        max_y: f32::NEG_INFINITY,
    };

    pub fn include(&mut self, x: f32, y: f32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Returns true if the box has no area.
    ///
    /// This includes the initial state as well as boxes around a single
    /// point or a straight horizontal or vertical line.
    pub fn is_empty(&self) -> bool {
        !(self.max_x > self.min_x && self.max_y > self.min_y)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the pixel dimensions of a canvas that exactly covers the box,
    /// or `None` if the box is empty.
    pub fn canvas_size(&self) -> Option<(u32, u32)> {
        if self.is_empty() {
            return None;
        }
        Some((self.width().ceil() as u32, self.height().ceil() as u32))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Where translated points end up.
struct Target<'a> {
    min_x: f32,
    min_y: f32,
    sink: &'a mut dyn PathSink,
}

/// Pen that places glyph outlines on a line.
///
/// Receives glyph-local outline callbacks in 26.6 units with Y up, shifts
/// them to the current glyph origin and flips Y. Without a sink, each point
/// (control points included) grows the bounding box. With a sink, points are
/// translated so that the minimum corner of a previously measured box lands
/// at the origin and are then forwarded.
pub struct GlyphPen<'a> {
    origin_x: f32,
    origin_y: f32,
    bounds: Bounds,
    target: Option<Target<'a>>,
}

impl<'a> GlyphPen<'a> {
    /// Creates a pen that only measures.
    pub fn measuring() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            bounds: Bounds::EMPTY,
            target: None,
        }
    }

    /// Creates a pen that forwards to `sink`, normalized by `bounds`.
    pub fn drawing(bounds: &Bounds, sink: &'a mut dyn PathSink) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            bounds: *bounds,
            target: Some(Target {
                min_x: bounds.min_x,
                min_y: bounds.min_y,
                sink,
            }),
        }
    }

    /// Sets the line space origin for the outline callbacks that follow.
    pub fn begin_glyph(&mut self, origin_x: f32, origin_y: f32) {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
    }

    /// Returns the box accumulated so far.
    ///
    /// For a drawing pen this is the box it was created with.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_drawing(&self) -> bool {
        self.target.is_some()
    }

    fn point(&mut self, x: f32, y: f32) -> (f32, f32) {
        let x = self.origin_x + x / FIXED_POINT_SCALE;
        let y = self.origin_y - y / FIXED_POINT_SCALE;
        match &self.target {
            Some(target) => (x - target.min_x, y - target.min_y),
            None => {
                self.bounds.include(x, y);
                (x, y)
            }
        }
    }

    fn sink(&mut self) -> Option<&mut (dyn PathSink + 'a)> {
        self.target.as_mut().map(|target| &mut *target.sink)
    }
}

impl OutlinePen for GlyphPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        if let Some(sink) = self.sink() {
            sink.move_to(x, y);
        }
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        if let Some(sink) = self.sink() {
            sink.line_to(x, y);
        }
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.point(cx0, cy0);
        let (x, y) = self.point(x, y);
        if let Some(sink) = self.sink() {
            sink.quad_to(cx0, cy0, x, y);
        }
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.point(cx0, cy0);
        let (cx1, cy1) = self.point(cx1, cy1);
        let (x, y) = self.point(x, y);
        if let Some(sink) = self.sink() {
            sink.curve_to(cx0, cy0, cx1, cy1, x, y);
        }
    }

    fn close(&mut self) {
        if let Some(sink) = self.sink() {
            sink.close();
        }
    }
}
