use tiny_skia::{FillRule, Mask, Path, Transform};

use crate::Error;

/// 8-bit coverage values in row-major order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AlphaCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AlphaCanvas {
    /// Fills `path` into a new canvas of the given size.
    ///
    /// The canvas starts fully transparent and receives the computed
    /// coverage directly; nothing is blended.
    pub fn fill(path: &Path, width: u32, height: u32) -> Result<Self, Error> {
        let mut mask = Mask::new(width, height).ok_or(Error::Canvas { width, height })?;
        mask.fill_path(path, FillRule::Winding, true, Transform::identity());
        Ok(Self {
            width,
            height,
            data: mask.data().to_vec(),
        })
    }

    /// Wraps existing coverage data.
    ///
    /// Returns `None` if `data` does not hold exactly `width * height`
    /// values.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() as u64 == width as u64 * height as u64).then_some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Coverage at (x, y), or 0 outside the canvas.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y as usize) * (self.width as usize) + x as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.width.max(1) as usize)
    }
}
