//! Squish WASM - WebAssembly bindings for Squish
//!
//! This crate exposes the squish-core recompression operation to
//! JavaScript/TypeScript applications. The UI reads a user-selected file,
//! picks a quality factor, and calls [`recompress`]; decoding, codec
//! selection and encoding all happen inside the module.
//!
//! # Usage
//!
//! ```typescript
//! import init, { recompress } from '@squish/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = recompress(bytes, file.type, slider.value / 100);
//! const blob = new Blob([result.bytes()], { type: result.mime_type });
//! console.log(`${result.width}x${result.height}, ${result.byte_length} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod recompress;
mod types;

pub use recompress::recompress;
pub use types::JsRecompressionResult;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
