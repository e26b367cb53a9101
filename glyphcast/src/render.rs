//! Two pass measure-then-draw over a glyph run.

use tiny_skia::PathBuilder;

use crate::{AlphaCanvas, Bounds, Error, GlyphPen, GlyphRun, OutlineSource, PathSink};

/// Result of rasterizing a glyph run.
#[derive(Clone, PartialEq, Debug)]
pub struct Rendering {
    /// Line space box measured in the first pass.
    pub bounds: Bounds,
    pub canvas: AlphaCanvas,
}

/// Computes the box around every outline point in the run, control points
/// included.
pub fn measure(run: &GlyphRun, source: &impl OutlineSource) -> Result<Bounds, Error> {
    let mut pen = GlyphPen::measuring();
    trace(run, source, &mut pen)?;
    Ok(pen.bounds())
}

/// Emits the outlines of the run to `sink`, translated so that the minimum
/// corner of `bounds` is the origin.
pub fn draw(
    run: &GlyphRun,
    source: &impl OutlineSource,
    bounds: &Bounds,
    sink: &mut dyn PathSink,
) -> Result<(), Error> {
    let mut pen = GlyphPen::drawing(bounds, sink);
    trace(run, source, &mut pen)
}

/// Measures the run, then draws it onto a canvas sized to the measured box.
pub fn render_run(run: &GlyphRun, source: &impl OutlineSource) -> Result<Rendering, Error> {
    let bounds = measure(run, source)?;
    let (width, height) = bounds.canvas_size().ok_or(Error::EmptyBounds)?;
    log::info!(
        "{} glyphs measure {:.2}x{:.2}, rasterizing at {width}x{height}",
        run.len(),
        bounds.width(),
        bounds.height()
    );
    let mut builder = PathBuilder::new();
    draw(run, source, &bounds, &mut builder)?;
    let path = builder.finish().ok_or(Error::EmptyBounds)?;
    let canvas = AlphaCanvas::fill(&path, width, height)?;
    Ok(Rendering { bounds, canvas })
}

/// Walks the run once, feeding every outline to `pen`.
///
/// Glyph diagnostics are only logged on the measuring walk so that a full
/// render reports each glyph once.
fn trace(run: &GlyphRun, source: &impl OutlineSource, pen: &mut GlyphPen) -> Result<(), Error> {
    let verbose = !pen.is_drawing();
    for placement in run.placements() {
        let glyph = &placement.glyph;
        if verbose {
            log::debug!(
                "glyph={} cluster={} advance=({}, {}) offset=({}, {})",
                glyph.glyph_id,
                glyph.cluster,
                glyph.x_advance,
                glyph.y_advance,
                glyph.x_offset,
                glyph.y_offset
            );
        }
        pen.begin_glyph(placement.origin_x, placement.origin_y);
        let has_outline = source.draw_outline(glyph.glyph_id, pen)?;
        if verbose && !has_outline {
            log::warn!("glyph {} has no outline", glyph.glyph_id);
        }
    }
    Ok(())
}
