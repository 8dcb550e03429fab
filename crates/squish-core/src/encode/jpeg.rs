//! JPEG encoding.
//!
//! Uses the image crate's JPEG encoder with a configurable quality setting,
//! the fallback codec for every input type without its own mapping.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{check_raster, EncodeError};

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality);
///   values outside the range are clamped
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    check_raster(pixels, width, height)?;

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            codec: "JPEG",
            reason: e.to_string(),
        })?;

    let bytes = buffer.into_inner();
    if bytes.is_empty() {
        return Err(EncodeError::EmptyOutput { codec: "JPEG" });
    }
    Ok(bytes)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=50, 1u32..=50)
    }

    proptest! {
        /// Property: Valid RGB input always produces a marker-framed JPEG.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in dimensions_strategy(),
            quality in 1u8..=100,
        ) {
            let size = (width as usize) * (height as usize) * 3;
            let pixels = vec![128u8; size];

            let jpeg_bytes = encode_jpeg(&pixels, width, height, quality).unwrap();

            prop_assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8], "Should have SOI marker");
            let len = jpeg_bytes.len();
            prop_assert!(len >= 4, "JPEG should have at least 4 bytes");
            prop_assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9], "Should have EOI marker");
        }

        /// Property: Mismatched pixel buffer length always returns an error.
        #[test]
        fn prop_invalid_pixel_length_returns_error(
            (width, height) in dimensions_strategy(),
            extra_or_missing in -10i32..=10,
        ) {
            prop_assume!(extra_or_missing != 0);

            let expected_size = (width as usize) * (height as usize) * 3;
            let actual_size = if extra_or_missing > 0 {
                expected_size + extra_or_missing as usize
            } else {
                expected_size.saturating_sub((-extra_or_missing) as usize)
            };
            prop_assume!(actual_size != expected_size);

            let pixels = vec![128u8; actual_size];
            let result = encode_jpeg(&pixels, width, height, 90);

            prop_assert!(
                matches!(result, Err(EncodeError::InvalidPixelData { .. })),
                "Mismatched pixel data should return InvalidPixelData error"
            );
        }

        /// Property: Zero dimensions always return an error.
        #[test]
        fn prop_zero_dimensions_return_error(
            width in 0u32..=1,
            height in 0u32..=1,
        ) {
            prop_assume!(width == 0 || height == 0);

            let result = encode_jpeg(&[], width, height, 90);
            prop_assert!(
                matches!(result, Err(EncodeError::InvalidDimensions { .. })),
                "Zero dimensions should return InvalidDimensions error"
            );
        }
    }
}
