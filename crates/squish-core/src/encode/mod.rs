//! Image encoding for Squish.
//!
//! One backend per output codec, all taking the same RGB8 raster: JPEG and
//! PNG through the image crate, WebP through libwebp. JPEG and WebP honor
//! a quality setting; PNG is lossless and has none.
//!
//! All operations are synchronous and single-threaded; each call writes
//! into its own buffer.

mod jpeg;
mod png;
mod webp;

pub use self::jpeg::encode_jpeg;
pub use self::png::encode_png;
pub use self::webp::encode_webp;

use thiserror::Error;

/// Errors that can occur while encoding a raster.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec rejected the raster or failed internally
    #[error("{codec} encoding failed: {reason}")]
    EncodingFailed { codec: &'static str, reason: String },

    /// The codec returned without producing any bytes
    #[error("{codec} encoder produced no output")]
    EmptyOutput { codec: &'static str },
}

/// Validate an RGB8 buffer against the claimed dimensions.
pub(crate) fn check_raster(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}
