//! Export format selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during export encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The requested target format cannot be encoded in-process.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoding failed in the codec
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Raster formats the export path can produce.
///
/// Everything else a user might ask for (SVG vectorization, TIFF, HEIC,
/// ICO, animated GIF) is rejected as [`EncodeError::UnsupportedFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Png,
    Jpeg,
    /// Lossless WebP.
    WebP,
    /// Single-frame GIF.
    Gif,
    Bmp,
}

impl ExportFormat {
    /// All formats the export path supports, in UI listing order.
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Png,
        ExportFormat::Jpeg,
        ExportFormat::WebP,
        ExportFormat::Gif,
        ExportFormat::Bmp,
    ];

    /// Parse a format from a user-facing name or MIME type.
    ///
    /// Accepts plain names (`"png"`, `"jpg"`, `"jpeg"`, ...) in any case, as
    /// well as full MIME types (`"image/png"`).
    pub fn from_name(name: &str) -> Result<Self, EncodeError> {
        let lower = name.trim().to_ascii_lowercase();
        let bare = lower.strip_prefix("image/").unwrap_or(&lower);

        match bare {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            "webp" => Ok(ExportFormat::WebP),
            "gif" => Ok(ExportFormat::Gif),
            "bmp" => Ok(ExportFormat::Bmp),
            _ => Err(EncodeError::UnsupportedFormat(name.to_string())),
        }
    }

    /// The MIME type of the encoded bytes.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::WebP => "image/webp",
            ExportFormat::Gif => "image/gif",
            ExportFormat::Bmp => "image/bmp",
        }
    }

    /// The conventional file extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
            ExportFormat::Gif => "gif",
            ExportFormat::Bmp => "bmp",
        }
    }

    /// True if the quality parameter affects this format.
    pub fn is_lossy(self) -> bool {
        matches!(self, ExportFormat::Jpeg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_names() {
        assert_eq!(ExportFormat::from_name("png").unwrap(), ExportFormat::Png);
        assert_eq!(ExportFormat::from_name("jpg").unwrap(), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_name("jpeg").unwrap(), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_name("webp").unwrap(), ExportFormat::WebP);
        assert_eq!(ExportFormat::from_name("gif").unwrap(), ExportFormat::Gif);
        assert_eq!(ExportFormat::from_name("bmp").unwrap(), ExportFormat::Bmp);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ExportFormat::from_name("PNG").unwrap(), ExportFormat::Png);
        assert_eq!(ExportFormat::from_name(" JPEG ").unwrap(), ExportFormat::Jpeg);
    }

    #[test]
    fn test_parse_mime_types() {
        assert_eq!(
            ExportFormat::from_name("image/png").unwrap(),
            ExportFormat::Png
        );
        assert_eq!(
            ExportFormat::from_name("image/jpeg").unwrap(),
            ExportFormat::Jpeg
        );
    }

    #[test]
    fn test_parse_unsupported_formats() {
        for name in ["tiff", "heic", "ico", "svg", "image/tiff", "pdf", ""] {
            let result = ExportFormat::from_name(name);
            assert!(
                matches!(result, Err(EncodeError::UnsupportedFormat(_))),
                "{name} should be unsupported"
            );
        }
    }

    #[test]
    fn test_mime_and_extension_round_trip() {
        for format in ExportFormat::ALL {
            assert_eq!(ExportFormat::from_name(format.mime_type()).unwrap(), format);
            assert_eq!(ExportFormat::from_name(format.extension()).unwrap(), format);
        }
    }
}
