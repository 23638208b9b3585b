//! Image resizing functions.
//!
//! Provides resize operations using the `image` crate's algorithms.
//! All functions return new `Surface` instances without modifying the input.

use super::{DecodeError, FilterType, Surface};

/// Resize a surface to exact dimensions.
///
/// No aspect-ratio enforcement happens at this layer - callers that want a
/// proportional resize compute the target dimensions themselves.
///
/// # Arguments
///
/// * `surface` - The source surface to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if a target dimension is zero.
pub fn resize(
    surface: &Surface,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Surface, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if surface.width == width && surface.height == height {
        return Ok(surface.clone());
    }

    let rgb_image = surface
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(Surface::from_rgb_image(resized))
}

/// Resize a surface to fit within a bounding box, preserving aspect ratio.
///
/// The surface is scaled by `min(max_width/w, max_height/h, 1.0)`, so it is
/// never upscaled beyond 1:1. A surface already inside the box is returned
/// unchanged.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if either box dimension is zero.
pub fn resize_to_fit(
    surface: &Surface,
    max_width: u32,
    max_height: u32,
    filter: FilterType,
) -> Result<Surface, DecodeError> {
    if max_width == 0 || max_height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // If already fits, just clone
    if surface.width <= max_width && surface.height <= max_height {
        return Ok(surface.clone());
    }

    let (new_width, new_height) =
        fit_dimensions(surface.width, surface.height, max_width, max_height);

    resize(surface, new_width, new_height, filter)
}

/// Calculate dimensions to fit within a box while preserving aspect ratio.
///
/// The scale factor is clamped to 1.0, and output dimensions never collapse
/// below 1 pixel.
pub(crate) fn fit_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let scale = (max_width as f64 / width as f64)
        .min(max_height as f64 / height as f64)
        .min(1.0);

    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);

    (new_width, new_height)
}
