//! Decoding of user-supplied image files.
//!
//! Uploads arrive as raw bytes plus the media type declared by the browser.
//! The media type is only checked for the `image/` prefix; the real
//! validation is the decode itself, which fails on undecodable payloads.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, Orientation, Surface};

/// Check whether a declared media type names an image.
///
/// This is the input-boundary check applied before decoding: the declared
/// type must start with `image/`. No magic-byte sniffing happens here.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Decode an uploaded image file from bytes.
///
/// The container format is guessed from the payload itself, so any raster
/// format the `image` crate understands (JPEG, PNG, WebP, GIF, BMP, ...)
/// decodes here. JPEGs additionally get their EXIF orientation applied so
/// camera photos land upright. Animated inputs decode as their first frame.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the payload is not a recognized
/// image, or `DecodeError::CorruptedFile` if decoding fails partway.
pub fn decode_image(bytes: &[u8]) -> Result<Surface, DecodeError> {
    // Extract EXIF orientation before decoding; absent or unreadable
    // EXIF data means no correction.
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    Ok(Surface::from_rgb_image(oriented.into_rgb8()))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
