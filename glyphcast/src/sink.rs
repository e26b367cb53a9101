use skrifa::outline::pen::PathElement;

/// Interface for path output in raster space.
///
/// Coordinates arriving here are already normalized: Y points down and the
/// minimum corner of the measured bounds sits at the origin.
pub trait PathSink {
    /// Move command.
    fn move_to(&mut self, x: f32, y: f32);

    /// Line segment command.
    fn line_to(&mut self, x: f32, y: f32);

    /// Quadratic bezier segment command.
    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32);

    /// Cubic bezier segment command.
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);

    /// Close subpath command.
    fn close(&mut self);
}

impl PathSink for tiny_skia::PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        tiny_skia::PathBuilder::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        tiny_skia::PathBuilder::line_to(self, x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        tiny_skia::PathBuilder::quad_to(self, cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        tiny_skia::PathBuilder::close(self);
    }
}

impl PathSink for Vec<PathElement> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PathElement::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PathElement::LineTo { x, y })
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.push(PathElement::QuadTo { cx0, cy0, x, y })
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push(PathElement::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(PathElement::Close)
    }
}

#[cfg(test)]
impl PathSink for kurbo::BezPath {
    fn move_to(&mut self, x: f32, y: f32) {
        kurbo::BezPath::move_to(self, (x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        kurbo::BezPath::line_to(self, (x as f64, y as f64));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        kurbo::BezPath::quad_to(self, (cx0 as f64, cy0 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        kurbo::BezPath::curve_to(
            self,
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.close_path();
    }
}
