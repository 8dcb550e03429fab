//! Squish Core - Image recompression library
//!
//! This crate provides the pipeline behind Squish: decoding a user-supplied
//! image file into an RGB raster, selecting an output codec from the file's
//! declared MIME type, and re-encoding the raster at a caller-chosen quality.
//!
//! The single entry point is [`recompress`]; the [`decode`], [`encode`] and
//! [`format`] modules expose the individual stages for callers that need
//! them separately.

pub mod decode;
pub mod encode;
pub mod format;
pub mod recompress;

pub use format::OutputFormat;
pub use recompress::{
    recompress, InputImage, RecompressError, RecompressionResult, MAX_QUALITY, MIN_QUALITY,
};
