//! Filter adjustment algorithms.
//!
//! Applies the slider-driven filter stack to RGB pixel data. Each stage
//! follows the semantics of the matching CSS filter function, applied in the
//! fixed order the editor composes them:
//!
//! 1. Brightness
//! 2. Contrast
//! 3. Saturate
//! 4. Grayscale
//! 5. Sepia
//! 6. Blur
//! 7. Hue rotation
//!
//! The blur stage is spatial, so the chain runs as a per-pixel pass up to
//! sepia, then the blur over the whole buffer, then the hue rotation.

use crate::decode::Surface;
use crate::FilterAdjustments;

/// Apply the full filter stack to a surface, returning a new surface.
///
/// This is the live-preview path: it never touches history, and the caller
/// decides whether the result is committed. Identity adjustments
/// short-circuit to a plain copy.
///
/// # Example
/// ```
/// use crono_core::{adjustments::apply_filters, FilterAdjustments};
/// use crono_core::decode::Surface;
///
/// let surface = Surface::new(1, 1, vec![128, 128, 128]);
/// let mut filters = FilterAdjustments::default();
/// filters.brightness = 150.0;
///
/// let brighter = apply_filters(&surface, &filters);
/// assert!(brighter.pixels[0] > surface.pixels[0]);
/// ```
pub fn apply_filters(surface: &Surface, filters: &FilterAdjustments) -> Surface {
    // Early exit if nothing to do
    if filters.is_identity() {
        return surface.clone();
    }

    let mut result = surface.clone();
    apply_color_stages(&mut result.pixels, filters);

    if filters.blur > 0.0 {
        result = apply_blur(&result, filters.blur);
    }

    if filters.hue_rotate != 0.0 {
        apply_hue_rotation(&mut result.pixels, filters.hue_rotate);
    }

    result
}

/// Run the per-pixel color stages (brightness through sepia) in place.
fn apply_color_stages(pixels: &mut [u8], filters: &FilterAdjustments) {
    let brightness = filters.brightness / 100.0;
    let contrast = filters.contrast / 100.0;
    let saturate = filters.saturate / 100.0;
    let grayscale = (filters.grayscale / 100.0).clamp(0.0, 1.0);
    let sepia = (filters.sepia / 100.0).clamp(0.0, 1.0);

    let color_identity =
        brightness == 1.0 && contrast == 1.0 && saturate == 1.0 && grayscale == 0.0 && sepia == 0.0;
    if color_identity {
        return;
    }

    for chunk in pixels.chunks_exact_mut(3) {
        let mut r = chunk[0] as f32 / 255.0;
        let mut g = chunk[1] as f32 / 255.0;
        let mut b = chunk[2] as f32 / 255.0;

        (r, g, b) = apply_brightness(r, g, b, brightness);
        (r, g, b) = apply_contrast(r, g, b, contrast);
        (r, g, b) = apply_saturate(r, g, b, saturate);
        (r, g, b) = apply_grayscale(r, g, b, grayscale);
        (r, g, b) = apply_sepia(r, g, b, sepia);

        chunk[0] = (r.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[1] = (g.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[2] = (b.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}

/// Linear brightness multiplier (1.0 = identity).
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 1.0 {
        return (r, g, b);
    }
    (r * amount, g * amount, b * amount)
}

/// Contrast about the 0.5 midpoint (1.0 = identity).
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 1.0 {
        return (r, g, b);
    }
    (
        (r - 0.5) * amount + 0.5,
        (g - 0.5) * amount + 0.5,
        (b - 0.5) * amount + 0.5,
    )
}

/// Calculate luminance using ITU-R BT.709 coefficients.
#[inline]
fn luminance(r: f32, g: f32, b: f32) -> f32 {
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Saturation as interpolation away from the luminance gray (1.0 = identity,
/// 0.0 = fully desaturated, above 1.0 oversaturates).
#[inline]
fn apply_saturate(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 1.0 {
        return (r, g, b);
    }
    let lum = luminance(r, g, b);
    (
        lum + (r - lum) * amount,
        lum + (g - lum) * amount,
        lum + (b - lum) * amount,
    )
}

/// Grayscale as interpolation toward the luminance gray (0.0 = identity).
#[inline]
fn apply_grayscale(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 0.0 {
        return (r, g, b);
    }
    let lum = luminance(r, g, b);
    (
        r + (lum - r) * amount,
        g + (lum - g) * amount,
        b + (lum - b) * amount,
    )
}

/// Sepia as interpolation toward the sepia-toned pixel (0.0 = identity).
///
/// Uses the standard sepia weighting matrix.
#[inline]
fn apply_sepia(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 0.0 {
        return (r, g, b);
    }
    let sr = 0.393 * r + 0.769 * g + 0.189 * b;
    let sg = 0.349 * r + 0.686 * g + 0.168 * b;
    let sb = 0.272 * r + 0.534 * g + 0.131 * b;
    (
        r + (sr - r) * amount,
        g + (sg - g) * amount,
        b + (sb - b) * amount,
    )
}

/// Gaussian blur stage.
///
/// The radius parameter matches the CSS `blur(px)` argument; the gaussian
/// standard deviation is half the radius.
fn apply_blur(surface: &Surface, radius: f32) -> Surface {
    let Some(img) = surface.to_rgb_image() else {
        return surface.clone();
    };
    let sigma = radius * 0.5;
    Surface::from_rgb_image(image::imageops::blur(&img, sigma))
}

/// Hue rotation in place, using the luminance-preserving rotation matrix.
fn apply_hue_rotation(pixels: &mut [u8], degrees: f32) {
    let rad = degrees.to_radians();
    let (sin, cos) = (rad.sin(), rad.cos());

    // Rows of the hue-rotation color matrix
    let m = [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ];

    for chunk in pixels.chunks_exact_mut(3) {
        let r = chunk[0] as f32 / 255.0;
        let g = chunk[1] as f32 / 255.0;
        let b = chunk[2] as f32 / 255.0;

        for (i, row) in m.iter().enumerate() {
            let v = row[0] * r + row[1] * g + row[2] * b;
            chunk[i] = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_surface(value: u8) -> Surface {
        Surface::new(2, 2, vec![value; 2 * 2 * 3])
    }

    fn colored_surface() -> Surface {
        Surface::new(1, 1, vec![200, 60, 40])
    }

    #[test]
    fn test_identity_filters_copy_pixels() {
        let surface = colored_surface();
        let result = apply_filters(&surface, &FilterAdjustments::default());
        assert_eq!(result.pixels, surface.pixels);
    }

    #[test]
    fn test_filters_do_not_mutate_source() {
        let surface = colored_surface();
        let before = surface.pixels.clone();

        let mut filters = FilterAdjustments::default();
        filters.brightness = 50.0;
        filters.blur = 2.0;
        let _ = apply_filters(&surface, &filters);

        assert_eq!(surface.pixels, before);
    }

    #[test]
    fn test_brightness_scales_values() {
        let surface = gray_surface(100);

        let mut brighter = FilterAdjustments::default();
        brighter.brightness = 150.0;
        let result = apply_filters(&surface, &brighter);
        assert_eq!(result.pixels[0], 150);

        let mut darker = FilterAdjustments::default();
        darker.brightness = 50.0;
        let result = apply_filters(&surface, &darker);
        assert_eq!(result.pixels[0], 50);
    }

    #[test]
    fn test_brightness_clamps_at_white() {
        let surface = gray_surface(200);
        let mut filters = FilterAdjustments::default();
        filters.brightness = 300.0;

        let result = apply_filters(&surface, &filters);
        assert!(result.pixels.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_contrast_pushes_away_from_midpoint() {
        let surface = Surface::new(2, 1, vec![64, 64, 64, 192, 192, 192]);
        let mut filters = FilterAdjustments::default();
        filters.contrast = 200.0;

        let result = apply_filters(&surface, &filters);
        assert!(result.pixels[0] < 64, "dark side gets darker");
        assert!(result.pixels[3] > 192, "bright side gets brighter");
    }

    #[test]
    fn test_zero_contrast_is_flat_gray() {
        let surface = colored_surface();
        let mut filters = FilterAdjustments::default();
        filters.contrast = 0.0;

        let result = apply_filters(&surface, &filters);
        assert_eq!(&result.pixels[0..3], &[128, 128, 128]);
    }

    #[test]
    fn test_full_grayscale_removes_color() {
        let surface = colored_surface();
        let mut filters = FilterAdjustments::default();
        filters.grayscale = 100.0;

        let result = apply_filters(&surface, &filters);
        let (r, g, b) = (result.pixels[0], result.pixels[1], result.pixels[2]);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_zero_saturate_equals_full_grayscale() {
        let surface = colored_surface();

        let mut desaturated = FilterAdjustments::default();
        desaturated.saturate = 0.0;

        let mut grayed = FilterAdjustments::default();
        grayed.grayscale = 100.0;

        assert_eq!(
            apply_filters(&surface, &desaturated).pixels,
            apply_filters(&surface, &grayed).pixels
        );
    }

    #[test]
    fn test_saturate_leaves_gray_untouched() {
        let surface = gray_surface(90);
        let mut filters = FilterAdjustments::default();
        filters.saturate = 250.0;

        let result = apply_filters(&surface, &filters);
        assert_eq!(result.pixels, surface.pixels);
    }

    #[test]
    fn test_sepia_warms_gray() {
        let surface = gray_surface(128);
        let mut filters = FilterAdjustments::default();
        filters.sepia = 100.0;

        let result = apply_filters(&surface, &filters);
        let (r, g, b) = (result.pixels[0], result.pixels[1], result.pixels[2]);
        assert!(r > g && g > b, "sepia orders channels r > g > b, got {:?}", (r, g, b));
    }

    #[test]
    fn test_blur_keeps_dimensions() {
        let surface = Surface::new(8, 6, vec![50; 8 * 6 * 3]);
        let mut filters = FilterAdjustments::default();
        filters.blur = 3.0;

        let result = apply_filters(&surface, &filters);
        assert_eq!((result.width, result.height), (8, 6));
    }

    #[test]
    fn test_blur_softens_edge() {
        // Half black, half white; after blurring, the boundary columns move
        // toward the middle
        let mut pixels = Vec::new();
        for _y in 0..8 {
            for x in 0..8 {
                let v = if x < 4 { 0u8 } else { 255 };
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        let surface = Surface::new(8, 8, pixels);

        let mut filters = FilterAdjustments::default();
        filters.blur = 4.0;
        let result = apply_filters(&surface, &filters);

        let mid_idx = ((4 * 8 + 3) * 3) as usize;
        let v = result.pixels[mid_idx];
        assert!(v > 0 && v < 255, "edge pixel should blend, got {}", v);
    }

    #[test]
    fn test_hue_rotation_full_turn_is_near_identity() {
        let surface = colored_surface();
        let mut filters = FilterAdjustments::default();
        filters.hue_rotate = 360.0;

        let result = apply_filters(&surface, &filters);
        for (a, b) in result.pixels.iter().zip(surface.pixels.iter()) {
            assert!((*a as i16 - *b as i16).abs() <= 2, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_hue_rotation_changes_color() {
        let surface = colored_surface();
        let mut filters = FilterAdjustments::default();
        filters.hue_rotate = 120.0;

        let result = apply_filters(&surface, &filters);
        assert_ne!(result.pixels, surface.pixels);
    }

    #[test]
    fn test_stage_order_brightness_before_contrast() {
        // 120% brightness then 150% contrast on 100-gray:
        // 100/255 * 1.2 = 0.4706 -> (0.4706 - 0.5) * 1.5 + 0.5 = 0.4559 -> 116
        // Contrast-first would give a different value, so this pins the order.
        let surface = gray_surface(100);
        let mut filters = FilterAdjustments::default();
        filters.brightness = 120.0;
        filters.contrast = 150.0;

        let result = apply_filters(&surface, &filters);
        assert_eq!(result.pixels[0], 116);
    }
}
