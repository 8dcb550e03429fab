//! Recompression WASM binding.
//!
//! This module exposes the squish-core recompression operation to
//! JavaScript as a single call: file bytes in, encoded blob plus
//! dimensions out.

use squish_core::InputImage;
use wasm_bindgen::prelude::*;

use crate::types::JsRecompressionResult;

/// Re-encode an image at the given quality factor.
///
/// The output codec follows the file's declared MIME type: `image/png`
/// stays PNG, `image/webp` stays WebP, and every other `image/*` type
/// (including `image/gif`, which loses animation) becomes JPEG. The raster
/// is never resized. PNG output accepts the quality factor but ignores it,
/// since PNG encoding is lossless.
///
/// # Arguments
///
/// * `bytes` - Full content of the user-selected file as a `Uint8Array`
/// * `declared_type` - The file's MIME type (`file.type`); must match `image/*`
/// * `quality` - Quality factor in 0.01-1.0 (slider percent divided by 100)
///
/// # Returns
///
/// A [`JsRecompressionResult`] carrying the encoded bytes, their MIME type
/// and the raster dimensions, or an error if validation, decoding or
/// encoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The declared type does not match `image/*`
/// - The quality factor is outside 0.01-1.0
/// - The bytes cannot be decoded, or the raster cannot be encoded
///
/// Failures are also logged to the browser console before the rejection
/// reaches the caller.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const result = recompress(bytes, file.type, 0.8);
/// const blob = new Blob([result.bytes()], { type: result.mime_type });
/// ```
#[wasm_bindgen]
pub fn recompress(
    bytes: &[u8],
    declared_type: &str,
    quality: f32,
) -> Result<JsRecompressionResult, JsValue> {
    squish_core::recompress(InputImage::new(bytes, declared_type), quality)
        .map(JsRecompressionResult::from_result)
        .map_err(|e| {
            let message = e.to_string();
            web_sys::console::error_1(&JsValue::from_str(&message));
            JsValue::from_str(&message)
        })
}
