//! Mirror operations.

use serde::{Deserialize, Serialize};

use crate::decode::Surface;

/// Axis for a flip operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipAxis {
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
}

/// Mirror a surface along the given axis, returning a new surface.
///
/// Dimensions are unchanged and the operation is an exact pixel
/// permutation - flipping twice restores the original buffer.
pub fn flip(surface: &Surface, axis: FlipAxis) -> Surface {
    let Some(img) = surface.to_rgb_image() else {
        return surface.clone();
    };

    let flipped = match axis {
        FlipAxis::Horizontal => image::imageops::flip_horizontal(&img),
        FlipAxis::Vertical => image::imageops::flip_vertical(&img),
    };

    Surface::from_rgb_image(flipped)
}
