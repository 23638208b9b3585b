//! Display fitting for the canvas host.
//!
//! The viewport decides how large the current surface is drawn inside its
//! container: aspect ratio preserved, never upscaled beyond 1:1, and a
//! hidden container (zero-sized) renders nothing at all. This is purely a
//! presentation concern - the logical surface keeps its stored resolution.

use crate::decode::{resize_to_fit, FilterType, Surface};

/// A computed display fit for a surface inside a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFit {
    /// Scale factor applied for display (at most 1.0).
    pub scale: f64,
    /// Display width in pixels (at least 1).
    pub width: u32,
    /// Display height in pixels (at least 1).
    pub height: u32,
}

/// Compute the display fit of a `width` x `height` surface inside a
/// container, or `None` when the container has no visible area.
pub fn fit(width: u32, height: u32, max_width: u32, max_height: u32) -> Option<ViewFit> {
    if max_width == 0 || max_height == 0 {
        return None;
    }
    if width == 0 || height == 0 {
        return None;
    }

    let scale = (max_width as f64 / width as f64)
        .min(max_height as f64 / height as f64)
        .min(1.0);

    Some(ViewFit {
        scale,
        width: ((width as f64 * scale).round() as u32).max(1),
        height: ((height as f64 * scale).round() as u32).max(1),
    })
}

/// Produce the display copy of a surface for a container.
///
/// Returns `None` for a hidden (zero-sized) container. A surface that
/// already fits is returned as a plain copy without resampling.
pub fn fit_surface(surface: &Surface, max_width: u32, max_height: u32) -> Option<Surface> {
    fit(surface.width, surface.height, max_width, max_height)?;

    // Bilinear is enough for the screen copy; export never goes through here
    resize_to_fit(surface, max_width, max_height, FilterType::Bilinear).ok()
}
