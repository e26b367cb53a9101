//! Shape a line of text and rasterize it to an alpha mask.
//!
//! The pipeline has four stages:
//!
//! 1. [`FontInstance::shape`] runs the text through rustybuzz and produces a
//!    [`GlyphRun`]: glyph identifiers with advances and offsets in pixels.
//! 2. [`measure`] walks the run, asking skrifa for each glyph outline, and
//!    accumulates a [`Bounds`] box around every point (control points
//!    included).
//! 3. [`draw`] walks the same run again, this time translating each point by
//!    the measured minimum corner and forwarding it to a [`PathSink`].
//! 4. The resulting path is filled into an [`AlphaCanvas`] which the
//!    [`encode`] module writes out as PNG and ASCII art.

mod error;
mod font;
mod pen;
mod raster;
mod render;
mod run;
mod sink;

pub mod encode;

#[cfg(test)]
mod testing;

pub use error::Error;
pub use font::{Font, FontInstance, OutlineSource};
pub use pen::{Bounds, GlyphPen, FIXED_POINT_SCALE};
pub use raster::AlphaCanvas;
pub use render::{draw, measure, render_run, Rendering};
pub use run::{GlyphPlacement, GlyphRun, ShapedGlyph};
pub use sink::PathSink;
