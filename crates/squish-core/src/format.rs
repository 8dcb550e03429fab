//! Output codec selection.
//!
//! The output format is a fixed function of the *declared* MIME type of the
//! input file: PNG stays PNG, WebP stays WebP, and every other `image/*`
//! type falls back to JPEG. File content is never inspected here, so a
//! mislabeled file still gets the codec its label asks for.

use serde::{Deserialize, Serialize};

/// Target codec for re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Lossy JPEG; the fallback for every `image/*` type without its own mapping.
    Jpeg,
    /// Lossless PNG; the quality factor has no effect on this codec.
    Png,
    /// Lossy WebP.
    WebP,
}

impl OutputFormat {
    /// Select the output codec for a declared input MIME type.
    ///
    /// Returns `None` when the declared type does not match `image/*`.
    /// Matching is ASCII case-insensitive and tolerates surrounding
    /// whitespace. Animated containers (`image/gif`) map to JPEG, so
    /// animation is not preserved.
    pub fn for_declared_type(declared: &str) -> Option<OutputFormat> {
        let declared = declared.trim().to_ascii_lowercase();
        if !declared.starts_with("image/") {
            return None;
        }
        match declared.as_str() {
            "image/png" => Some(OutputFormat::Png),
            "image/webp" => Some(OutputFormat::WebP),
            _ => Some(OutputFormat::Jpeg),
        }
    }

    /// The MIME type of the encoded output.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_is_fixed_three_way() {
        let cases = [
            ("image/png", OutputFormat::Png),
            ("image/webp", OutputFormat::WebP),
            ("image/jpeg", OutputFormat::Jpeg),
            ("image/jpg", OutputFormat::Jpeg),
            ("image/gif", OutputFormat::Jpeg),
            ("image/bmp", OutputFormat::Jpeg),
            ("image/tiff", OutputFormat::Jpeg),
            ("image/svg+xml", OutputFormat::Jpeg),
        ];
        for (declared, expected) in cases {
            assert_eq!(
                OutputFormat::for_declared_type(declared),
                Some(expected),
                "declared type {declared}"
            );
        }
    }

    #[test]
    fn test_non_image_types_rejected() {
        for declared in ["text/plain", "application/pdf", "video/mp4", "image", ""] {
            assert_eq!(OutputFormat::for_declared_type(declared), None);
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            OutputFormat::for_declared_type("IMAGE/PNG"),
            Some(OutputFormat::Png)
        );
        assert_eq!(
            OutputFormat::for_declared_type("Image/WebP"),
            Some(OutputFormat::WebP)
        );
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        assert_eq!(
            OutputFormat::for_declared_type(" image/png "),
            Some(OutputFormat::Png)
        );
    }

    #[test]
    fn test_mime_type_roundtrip() {
        for format in [OutputFormat::Jpeg, OutputFormat::Png, OutputFormat::WebP] {
            assert_eq!(
                OutputFormat::for_declared_type(format.mime_type()),
                Some(format)
            );
        }
    }
}
