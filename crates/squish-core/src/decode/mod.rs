//! Image decoding for Squish.
//!
//! Turns user-supplied file bytes into an RGB raster. The container format
//! is sniffed from the bytes rather than trusted from the file's declared
//! type, and EXIF orientation is applied so the raster matches what the
//! browser's own decoder would have displayed.
//!
//! All operations are synchronous and single-threaded; each call decodes
//! into its own buffer and nothing is cached between calls.

mod raster;
mod types;

pub use raster::decode_image;
pub use types::{DecodeError, DecodedImage, Orientation};
