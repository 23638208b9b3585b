//! WASM-compatible wrapper types for image data.
//!
//! Provides JavaScript-friendly types around the core engine types, handling
//! the conversion between Rust and JavaScript data representations.

use crono_core::decode::Surface;
use wasm_bindgen::prelude::*;

/// A pixel surface exposed to JavaScript.
///
/// Wraps the core `Surface` type: RGB data, 3 bytes per pixel, row-major.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to a
/// JavaScript `Uint8Array`; for display, pair that copy with the dimensions
/// and blit it through `putImageData`. wasm-bindgen's finalizer reclaims the
/// WASM-side buffer, or call `free()` to drop a large surface eagerly.
#[wasm_bindgen]
pub struct JsSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSurface {
    /// Create a new JsSurface from dimensions and RGB pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSurface {
        JsSurface {
            width,
            height,
            pixels,
        }
    }

    /// Surface width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as a Uint8Array copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSurface {
    /// Wrap a core surface for the JS side.
    pub(crate) fn from_surface(surface: Surface) -> Self {
        Self {
            width: surface.width,
            height: surface.height,
            pixels: surface.pixels,
        }
    }

    /// Convert back to a core surface. Clones the pixel data.
    pub(crate) fn to_surface(&self) -> Surface {
        Surface {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}
