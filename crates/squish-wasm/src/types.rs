//! WASM-compatible wrapper types for recompression results.

use js_sys::Uint8Array;
use squish_core::RecompressionResult;
use wasm_bindgen::prelude::*;

/// Result of a recompression call, exposed to JavaScript.
///
/// The encoded bytes live in WASM memory; [`bytes`](Self::bytes) copies
/// them out as a `Uint8Array` suitable for `new Blob([...])`. Dimensions
/// and the resolved MIME type are plain getters, so the UI can render the
/// size/dimension comparison without touching the blob.
///
/// The `free()` method generated by wasm-bindgen can be called to release
/// WASM memory immediately; otherwise the finalizer handles cleanup.
#[wasm_bindgen]
pub struct JsRecompressionResult {
    bytes: Vec<u8>,
    mime_type: &'static str,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsRecompressionResult {
    /// Raster width in pixels; always equals the decoded input's width.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels; always equals the decoded input's height.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// MIME type of the encoded bytes (`image/jpeg`, `image/png` or
    /// `image/webp`). Derive the download filename's extension from this,
    /// not from the original file's name.
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.mime_type.to_string()
    }

    /// Size of the encoded image in bytes.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the encoded image as a Uint8Array.
    ///
    /// Note: This copies the data out of WASM memory.
    pub fn bytes(&self) -> Uint8Array {
        Uint8Array::from(&self.bytes[..])
    }
}

impl JsRecompressionResult {
    /// Create a JsRecompressionResult from a core RecompressionResult.
    pub(crate) fn from_result(result: RecompressionResult) -> Self {
        Self {
            bytes: result.bytes,
            mime_type: result.mime_type,
            width: result.width,
            height: result.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let result = RecompressionResult {
            bytes: vec![0xFF, 0xD8, 0xFF, 0xD9],
            mime_type: "image/jpeg",
            width: 640,
            height: 480,
        };
        let js = JsRecompressionResult::from_result(result);
        assert_eq!(js.width(), 640);
        assert_eq!(js.height(), 480);
        assert_eq!(js.mime_type(), "image/jpeg");
        assert_eq!(js.byte_length(), 4);
    }
}
