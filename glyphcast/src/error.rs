//! Errors raised while loading, shaping, rasterizing and encoding.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a render.
///
/// None of these are recoverable for a single-shot render; the binary
/// reports the message and exits with a non-zero status.
#[derive(Debug, Error)]
pub enum Error {
    /// The font file is missing, unreadable or not a font we can parse.
    #[error("failed to load font from {origin}: {reason}")]
    FontLoad { origin: String, reason: String },

    /// A font instance was requested at a size that cannot hold an outline.
    #[error("invalid size of {0} pixels per em; must be at least 1")]
    InvalidSize(u32),

    /// The shaping engine or outline extraction failed.
    #[error("shaping failed: {0}")]
    Shaping(String),

    /// The text produced no ink, so there is nothing to rasterize.
    ///
    /// This covers empty strings, whitespace-only strings and runs whose
    /// outlines collapse to a line or a point.
    #[error("text has no visible outlines; refusing to rasterize an empty canvas")]
    EmptyBounds,

    /// The coverage mask could not be allocated.
    #[error("unable to allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    /// Writing the PNG file failed.
    #[error("failed to encode {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },

    /// Writing the text preview failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
