//! Image rotation about the center.
//!
//! Right-angle rotations (90/180/270 and any full-turn multiple) are exact
//! pixel permutations, so repeated quarter turns never accumulate resampling
//! loss. Arbitrary angles use inverse mapping with bilinear sampling: for
//! each output pixel, the contributing source position is computed by
//! rotating back through the angle, and the four neighbours are blended.
//!
//! Angles are in degrees with positive values rotating clockwise, matching
//! the 2D canvas convention the editor UI exposes.

use crate::decode::Surface;

/// Compute the output dimensions for a rotation.
///
/// Quarter turns swap width and height; half and full turns preserve them.
/// Any other angle expands the canvas to the bounding box of the rotated
/// rectangle so nothing is clipped.
///
/// # Example
///
/// ```ignore
/// let (w, h) = rotated_bounds(100, 50, 90.0);
/// assert_eq!((w, h), (50, 100));
/// ```
pub fn rotated_bounds(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    match normalize_angle(degrees) {
        NormalizedAngle::Zero | NormalizedAngle::Half => (width, height),
        NormalizedAngle::Quarter | NormalizedAngle::ThreeQuarter => (height, width),
        NormalizedAngle::Other(angle) => {
            let rad = angle.to_radians();
            let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
            let (w, h) = (width as f64, height as f64);

            // Bounding box of a rotated rectangle
            let new_w = (w * cos + h * sin).round() as u32;
            let new_h = (w * sin + h * cos).round() as u32;
            (new_w.max(1), new_h.max(1))
        }
    }
}

/// Rotate a surface about its center, returning a new surface.
///
/// Positive angles rotate clockwise. The source surface is untouched.
/// For ±90 degrees the output dimensions are the source dimensions swapped;
/// 180 degrees and full turns keep them; any other angle expands the canvas
/// to the rotated bounding box.
pub fn rotate(surface: &Surface, degrees: f64) -> Surface {
    match normalize_angle(degrees) {
        NormalizedAngle::Zero => surface.clone(),
        NormalizedAngle::Quarter => permute(surface, |img| image::imageops::rotate90(img)),
        NormalizedAngle::Half => permute(surface, |img| image::imageops::rotate180(img)),
        NormalizedAngle::ThreeQuarter => permute(surface, |img| image::imageops::rotate270(img)),
        NormalizedAngle::Other(angle) => rotate_arbitrary(surface, angle),
    }
}

/// A rotation angle reduced to [0, 360) and classified by fast path.
enum NormalizedAngle {
    Zero,
    Quarter,
    Half,
    ThreeQuarter,
    Other(f64),
}

const ANGLE_EPSILON: f64 = 0.001;

fn normalize_angle(degrees: f64) -> NormalizedAngle {
    let angle = degrees.rem_euclid(360.0);

    if angle < ANGLE_EPSILON || (360.0 - angle) < ANGLE_EPSILON {
        NormalizedAngle::Zero
    } else if (angle - 90.0).abs() < ANGLE_EPSILON {
        NormalizedAngle::Quarter
    } else if (angle - 180.0).abs() < ANGLE_EPSILON {
        NormalizedAngle::Half
    } else if (angle - 270.0).abs() < ANGLE_EPSILON {
        NormalizedAngle::ThreeQuarter
    } else {
        NormalizedAngle::Other(angle)
    }
}

/// Apply an exact pixel permutation through the image crate.
fn permute<F>(surface: &Surface, op: F) -> Surface
where
    F: FnOnce(&image::RgbImage) -> image::RgbImage,
{
    match surface.to_rgb_image() {
        Some(img) => Surface::from_rgb_image(op(&img)),
        // An inconsistent buffer cannot reach here through the engine;
        // degrade to a copy rather than panic.
        None => surface.clone(),
    }
}

/// Rotate by an arbitrary angle with canvas expansion and bilinear sampling.
fn rotate_arbitrary(surface: &Surface, angle: f64) -> Surface {
    let (dst_w, dst_h) = rotated_bounds(surface.width, surface.height, angle);

    let rad = angle.to_radians();
    let (sin, cos) = (rad.sin(), rad.cos());

    let src_cx = surface.width as f64 / 2.0;
    let src_cy = surface.height as f64 / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut output = vec![0u8; (dst_w * dst_h * 3) as usize];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let dx = dst_x as f64 - dst_cx;
            let dy = dst_y as f64 - dst_cy;

            // Inverse of a clockwise rotation in y-down coordinates
            let src_x = dx * cos + dy * sin + src_cx;
            let src_y = -dx * sin + dy * cos + src_cy;

            let pixel = sample_bilinear(surface, src_x, src_y);

            let dst_idx = ((dst_y * dst_w + dst_x) * 3) as usize;
            output[dst_idx..dst_idx + 3].copy_from_slice(&pixel);
        }
    }

    Surface::new(dst_w, dst_h, output)
}

#[inline]
fn pixel_f64(surface: &Surface, px: usize, py: usize) -> [f64; 3] {
    let idx = (py * surface.width as usize + px) * 3;
    [
        surface.pixels[idx] as f64,
        surface.pixels[idx + 1] as f64,
        surface.pixels[idx + 2] as f64,
    ]
}

/// Sample a pixel with bilinear interpolation; out-of-bounds reads are black.
fn sample_bilinear(surface: &Surface, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = (surface.width as i64, surface.height as i64);

    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return [0, 0, 0];
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = pixel_f64(surface, x0, y0);
    let p10 = pixel_f64(surface, x0 + 1, y0);
    let p01 = pixel_f64(surface, x0, y0 + 1);
    let p11 = pixel_f64(surface, x0 + 1, y0 + 1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }
    result
}
