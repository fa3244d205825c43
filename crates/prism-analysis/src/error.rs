//! Error types for prism-analysis.

use thiserror::Error;

/// Result type alias for prism-analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in prism-analysis.
///
/// The transforms themselves never fail; these cover the luminance adapter.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel buffer does not match the declared field size.
    #[error("Luminance buffer holds {len} pixels, expected {width}x{height}")]
    FieldSize {
        width: usize,
        height: usize,
        len: usize,
    },

    /// RGBA buffer length is not a whole number of 4-byte pixels.
    #[error("RGBA buffer of {bytes} bytes is not a whole number of pixels")]
    PartialPixel { bytes: usize },

    /// Field has columns but no rows.
    #[error("Luminance field with {width} columns has zero height")]
    EmptyHeight { width: usize },
}
