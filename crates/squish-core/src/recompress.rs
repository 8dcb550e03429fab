//! The recompression operation.
//!
//! One call takes the full bytes of a user-selected file plus its declared
//! MIME type and a quality factor, and produces a freshly encoded blob with
//! the raster's dimensions. Nothing is retained between calls and there are
//! no retries; a failure at any stage is terminal and the caller retries
//! with a fresh invocation. Concurrent calls share no mutable state.

use thiserror::Error;

use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_jpeg, encode_png, encode_webp, EncodeError};
use crate::format::OutputFormat;

/// Lowest accepted quality factor (1 on a 1-100 slider).
pub const MIN_QUALITY: f32 = 0.01;

/// Highest accepted quality factor.
pub const MAX_QUALITY: f32 = 1.0;

/// A user-supplied image file: raw bytes plus the declared MIME type.
///
/// The declared type drives codec selection only; decoding sniffs the real
/// container format from the bytes.
#[derive(Debug, Clone, Copy)]
pub struct InputImage<'a> {
    /// Full content of the file.
    pub bytes: &'a [u8],
    /// MIME type as reported by the file picker (e.g. `image/jpeg`).
    pub mime_type: &'a str,
}

impl<'a> InputImage<'a> {
    pub fn new(bytes: &'a [u8], mime_type: &'a str) -> Self {
        Self { bytes, mime_type }
    }
}

/// Output of a successful recompression. Ownership passes to the caller.
#[derive(Debug, Clone)]
pub struct RecompressionResult {
    /// The encoded image.
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`, derived from the declared input type.
    pub mime_type: &'static str,
    /// Raster width in pixels; always equals the decoded input's width.
    pub width: u32,
    /// Raster height in pixels; always equals the decoded input's height.
    pub height: u32,
}

/// Errors surfaced by [`recompress`].
#[derive(Debug, Error)]
pub enum RecompressError {
    /// The declared MIME type does not match `image/*`.
    #[error("not an image: {declared:?}")]
    NotAnImage { declared: String },

    /// The quality factor is outside [`MIN_QUALITY`]..=[`MAX_QUALITY`].
    #[error("quality out of range: {quality} (expected 0.01 to 1.0)")]
    QualityOutOfRange { quality: f32 },

    /// The input bytes could not be rasterized.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// The raster could not be serialized to the target codec.
    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),
}

/// Re-encode an image at the given quality factor.
///
/// The declared MIME type must match `image/*` and `quality` must lie in
/// [`MIN_QUALITY`]..=[`MAX_QUALITY`]; both are checked before any decode
/// work, declared type first. The output codec follows the declared type
/// (PNG stays PNG, WebP stays WebP, everything else becomes JPEG) and the
/// raster is never resized: the result's dimensions always equal the
/// decoded input's.
///
/// For PNG output the quality factor is accepted but has no effect on the
/// bytes, since PNG encoding is lossless. This mirrors what browser canvas
/// encoders do with the same inputs and is intentional.
pub fn recompress(
    input: InputImage<'_>,
    quality: f32,
) -> Result<RecompressionResult, RecompressError> {
    let format =
        OutputFormat::for_declared_type(input.mime_type).ok_or_else(|| {
            RecompressError::NotAnImage {
                declared: input.mime_type.to_string(),
            }
        })?;

    // Range check; also rejects NaN.
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(RecompressError::QualityOutOfRange { quality });
    }

    let raster = decode_image(input.bytes)?;

    let bytes = match format {
        OutputFormat::Jpeg => encode_jpeg(
            &raster.pixels,
            raster.width,
            raster.height,
            jpeg_quality(quality),
        )?,
        OutputFormat::Png => encode_png(&raster.pixels, raster.width, raster.height)?,
        OutputFormat::WebP => {
            encode_webp(&raster.pixels, raster.width, raster.height, quality * 100.0)?
        }
    };

    Ok(RecompressionResult {
        bytes,
        mime_type: format.mime_type(),
        width: raster.width,
        height: raster.height,
    })
}

/// Map the 0.01-1.0 quality factor onto the JPEG encoder's 1-100 scale.
fn jpeg_quality(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================
