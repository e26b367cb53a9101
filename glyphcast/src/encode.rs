//! Serializing an [`AlphaCanvas`] as PNG and as ASCII art.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{AlphaCanvas, Error};

/// Characters for the text preview, from sparse to dense.
///
/// Indexed by the top two bits of the coverage value.
pub const ASCII_RAMP: &[u8; 4] = b".++8";

/// Maps a coverage value to its preview character.
pub fn ascii_char(alpha: u8) -> u8 {
    ASCII_RAMP[(alpha >> 6) as usize]
}

/// Renders the canvas as ASCII art: one character per pixel and a newline
/// after every row.
pub fn ascii_art(canvas: &AlphaCanvas) -> Vec<u8> {
    let mut buf =
        Vec::with_capacity(canvas.height() as usize * (canvas.width() as usize + 1));
    for row in canvas.rows() {
        buf.extend(row.iter().copied().map(ascii_char));
        buf.push(b'\n');
    }
    buf
}

/// Writes the ASCII art preview with a single write.
pub fn write_ascii(canvas: &AlphaCanvas, out: &mut impl Write) -> Result<(), Error> {
    out.write_all(&ascii_art(canvas))?;
    out.flush()?;
    Ok(())
}

/// Encodes the canvas as an 8-bit, single channel PNG.
///
/// Sample values are the coverage values, unchanged. The one channel is
/// stored as grayscale, so ink shows up white on black; there is no
/// separate alpha channel.
pub fn write_png(canvas: &AlphaCanvas, out: impl Write) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(out, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(canvas.data())?;
    writer.finish()
}

/// Writes the canvas to `path` as PNG, replacing any existing file.
pub fn save_png(canvas: &AlphaCanvas, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let encode_error = |source: png::EncodingError| Error::Encode {
        path: path.to_owned(),
        source,
    };
    let file = File::create(path).map_err(|e| encode_error(e.into()))?;
    let mut out = BufWriter::new(file);
    write_png(canvas, &mut out).map_err(encode_error)?;
    out.flush().map_err(|e| encode_error(e.into()))?;
    log::info!(
        "wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}
