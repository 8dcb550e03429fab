//! Lossy WebP encoding.
//!
//! The image crate only writes lossless WebP, so this backend goes through
//! libwebp via the `webp` crate to honor the quality setting.

use super::{check_raster, EncodeError};

/// Encode RGB pixel data to lossy WebP bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - WebP quality (0.0-100.0, where 100.0 is highest quality);
///   values outside the range are clamped
pub fn encode_webp(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: f32,
) -> Result<Vec<u8>, EncodeError> {
    check_raster(pixels, width, height)?;

    let quality = quality.clamp(0.0, 100.0);

    let encoder = ::webp::Encoder::from_rgb(pixels, width, height);
    let encoded = encoder
        .encode_simple(false, quality)
        .map_err(|e| EncodeError::EncodingFailed {
            codec: "WebP",
            reason: format!("{e:?}"),
        })?;

    let bytes = encoded.to_vec();
    if bytes.is_empty() {
        return Err(EncodeError::EmptyOutput { codec: "WebP" });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_webp_basic() {
        let pixels = vec![128u8; 32 * 16 * 3];

        let webp_bytes = encode_webp(&pixels, 32, 16, 80.0).unwrap();

        // RIFF container with a WEBP fourcc
        assert_eq!(&webp_bytes[0..4], b"RIFF");
        assert_eq!(&webp_bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_encode_webp_quality_affects_size() {
        let width = 64usize;
        let height = 64usize;
        let mut pixels = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(((x + y) * 127 / (width + height)) as u8);
            }
        }

        let low_q = encode_webp(&pixels, 64, 64, 10.0).unwrap();
        let high_q = encode_webp(&pixels, 64, 64, 95.0).unwrap();

        assert!(high_q.len() > low_q.len() || (low_q.len() - high_q.len()) < 100);
    }

    #[test]
    fn test_encode_webp_quality_clamping() {
        let pixels = vec![128u8; 8 * 8 * 3];

        assert!(encode_webp(&pixels, 8, 8, -1.0).is_ok());
        assert!(encode_webp(&pixels, 8, 8, 250.0).is_ok());
    }

    #[test]
    fn test_encode_webp_invalid_pixel_data() {
        let pixels = vec![128u8; 8 * 8 * 3 + 3];

        let result = encode_webp(&pixels, 8, 8, 80.0);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_webp_zero_dimensions() {
        let result = encode_webp(&[], 8, 0, 80.0);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }
}
