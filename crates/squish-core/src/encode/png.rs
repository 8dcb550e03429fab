//! PNG encoding.
//!
//! PNG is lossless, so there is no quality knob at this layer; callers that
//! accept a quality factor for PNG output get the same bytes at every
//! setting.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{check_raster, EncodeError};

/// Encode RGB pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    check_raster(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            codec: "PNG",
            reason: e.to_string(),
        })?;

    let bytes = buffer.into_inner();
    if bytes.is_empty() {
        return Err(EncodeError::EmptyOutput { codec: "PNG" });
    }
    Ok(bytes)
}
