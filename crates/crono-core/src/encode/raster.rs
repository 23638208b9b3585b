//! Raster encoding for export.
//!
//! Serializes a full-resolution [`Surface`] into one of the supported
//! container formats using the `image` crate's encoders. Quality applies to
//! JPEG only; PNG, WebP (lossless), GIF and BMP ignore it.
//!
//! [`Surface`]: crate::decode::Surface

use std::io::Cursor;

use image::codecs::bmp::BmpEncoder;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, Frame, ImageEncoder};

use super::{EncodeError, ExportFormat};
use crate::decode::Surface;

/// Encode a surface into the requested format.
///
/// # Arguments
///
/// * `surface` - The full-resolution surface to serialize
/// * `format` - Target container format
/// * `quality` - JPEG quality (1-100, clamped; ignored by lossless formats)
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` or `InvalidPixelData` when the
/// surface is inconsistent, and `EncodeError::EncodingFailed` when the codec
/// reports an error.
pub fn encode(surface: &Surface, format: ExportFormat, quality: u8) -> Result<Vec<u8>, EncodeError> {
    // Validate dimensions
    if surface.width == 0 || surface.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: surface.width,
            height: surface.height,
        });
    }

    // Validate pixel data length
    let expected_len = (surface.width as usize) * (surface.height as usize) * 3;
    if surface.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: surface.pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    match format {
        ExportFormat::Png => encode_png(surface),
        ExportFormat::Jpeg => encode_jpeg(surface, quality),
        ExportFormat::WebP => encode_webp(surface),
        ExportFormat::Gif => encode_gif(surface),
        ExportFormat::Bmp => encode_bmp(surface),
    }
}

fn encode_png(surface: &Surface) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            &surface.pixels,
            surface.width,
            surface.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn encode_jpeg(surface: &Surface, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            &surface.pixels,
            surface.width,
            surface.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn encode_webp(surface: &Surface) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    // The image crate only ships the lossless WebP encoder
    WebPEncoder::new_lossless(&mut buffer)
        .write_image(
            &surface.pixels,
            surface.width,
            surface.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn encode_gif(surface: &Surface) -> Result<Vec<u8>, EncodeError> {
    let rgb = surface
        .to_rgb_image()
        .ok_or_else(|| EncodeError::EncodingFailed("Inconsistent pixel buffer".to_string()))?;
    let rgba = image::DynamicImage::ImageRgb8(rgb).into_rgba8();

    let mut out = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut out);
        encoder
            .encode_frame(Frame::new(rgba))
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    }
    Ok(out)
}

fn encode_bmp(surface: &Surface) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    BmpEncoder::new(&mut buffer)
        .write_image(
            &surface.pixels,
            surface.width,
            surface.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}
