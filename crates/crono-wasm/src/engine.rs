//! The stateful editor engine binding.
//!
//! Exposes `crono_core::Editor` as a JavaScript class. One instance backs
//! one editor page; the UI calls the commit operations in response to
//! discrete user actions and redraws from `render_view` after each.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const engine = new Engine();
//! engine.load(bytes, file.type);
//! engine.rotate(90);
//!
//! const view = engine.render_view(container.clientWidth, maxHeight);
//! if (view) {
//!     canvas.width = view.width;
//!     canvas.height = view.height;
//!     blitRgb(ctx, view);  // expand RGB to RGBA, putImageData
//! }
//! ```

use crono_core::transform::FlipAxis;
use crono_core::Editor;
use wasm_bindgen::prelude::*;

use crate::filters::FilterAdjustments;
use crate::types::JsSurface;

/// The image editor engine for one editing session.
#[wasm_bindgen]
#[derive(Default)]
pub struct Engine {
    inner: Editor,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine with the default history depth.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine {
            inner: Editor::new(),
        }
    }

    /// Create an engine retaining at most `cap` undo snapshots.
    pub fn with_history_cap(cap: usize) -> Engine {
        Engine {
            inner: Editor::with_history_cap(cap),
        }
    }

    /// Load a new original image from an upload.
    ///
    /// `media_type` is the file's declared MIME type; anything without the
    /// `image/` prefix is rejected before decoding. A failed load leaves
    /// the previous session intact.
    pub fn load(&mut self, bytes: &[u8], media_type: &str) -> Result<(), JsValue> {
        self.inner
            .load(bytes, media_type)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// True once an image has been loaded
    #[wasm_bindgen(getter)]
    pub fn loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    /// Full-resolution width of the current image (0 before load)
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.surface().map_or(0, |s| s.width)
    }

    /// Full-resolution height of the current image (0 before load)
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.surface().map_or(0, |s| s.height)
    }

    /// Rotate the image and commit. Positive degrees rotate clockwise;
    /// ±90 swaps the dimensions.
    pub fn rotate(&mut self, degrees: f64) -> Result<(), JsValue> {
        self.ensure_loaded()?;
        self.inner.rotate(degrees);
        Ok(())
    }

    /// Mirror the image and commit. `axis` is `"h"` / `"horizontal"` or
    /// `"v"` / `"vertical"`.
    pub fn flip(&mut self, axis: &str) -> Result<(), JsValue> {
        self.ensure_loaded()?;
        let axis = parse_axis(axis)?;
        self.inner.flip(axis);
        Ok(())
    }

    /// Resample the image to exact dimensions and commit.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.ensure_loaded()?;
        self.inner
            .resize(width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Produce a filter preview without committing.
    ///
    /// Call freely during slider drags; history is untouched until the
    /// preview is handed to `commit_filters`.
    pub fn preview_filters(&self, filters: &FilterAdjustments) -> Result<JsSurface, JsValue> {
        self.ensure_loaded()?;
        let preview = self.inner.preview_filters(filters.as_core());
        Ok(JsSurface::from_surface(preview))
    }

    /// Commit a previously produced preview as the new current state.
    pub fn commit_filters(&mut self, preview: &JsSurface) -> Result<(), JsValue> {
        self.ensure_loaded()?;
        self.inner.commit_filters(preview.to_surface());
        Ok(())
    }

    /// Step back one snapshot. Returns false when already at the oldest.
    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    /// Step forward one snapshot. Returns false when already at the newest.
    pub fn redo(&mut self) -> bool {
        self.inner.redo()
    }

    /// True if an undo would change the image (drives the undo button)
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    /// True if a redo would change the image
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    /// Number of retained history snapshots
    pub fn history_len(&self) -> usize {
        self.inner.history_len()
    }

    /// The current full-resolution surface.
    pub fn current(&self) -> Result<JsSurface, JsValue> {
        let surface = self
            .inner
            .surface()
            .ok_or_else(|| JsValue::from_str("No image loaded"))?;
        Ok(JsSurface::from_surface(surface.clone()))
    }

    /// Produce the display copy for a container of the given size.
    ///
    /// Aspect preserved, never upscaled beyond 1:1. Returns `null` when the
    /// container is hidden (zero-sized), so a background tab renders as a
    /// no-op.
    pub fn render_view(&self, max_width: u32, max_height: u32) -> Option<JsSurface> {
        let surface = self.inner.surface()?;
        crono_core::viewport::fit_surface(surface, max_width, max_height)
            .map(JsSurface::from_surface)
    }

    /// Encode the current image for download.
    ///
    /// `format` accepts a name (`"png"`, `"jpg"`, ...) or MIME type;
    /// `quality` is 1-100 and applies to JPEG. Always encodes the
    /// full-resolution surface, never the display copy.
    pub fn export(&self, format: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
        self.ensure_loaded()?;
        let format = crono_core::encode::ExportFormat::from_name(format)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner
            .export(format, quality)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Engine {
    fn ensure_loaded(&self) -> Result<(), JsValue> {
        if self.inner.is_loaded() {
            Ok(())
        } else {
            Err(JsValue::from_str("No image loaded"))
        }
    }
}

fn parse_axis(axis: &str) -> Result<FlipAxis, JsValue> {
    match axis {
        "h" | "horizontal" => Ok(FlipAxis::Horizontal),
        "v" | "vertical" => Ok(FlipAxis::Vertical),
        other => Err(JsValue::from_str(&format!("Unknown flip axis: {other}"))),
    }
}


/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// A tiny valid PNG upload (1x1).
    fn tiny_png() -> Vec<u8> {
        let img = image_bytes();
        img.to_vec()
    }

    // 1x1 white PNG, pre-encoded so the test needs no encoder
    fn image_bytes() -> &'static [u8] {
        &[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00,
            0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08,
            0xD7, 0x63, 0xF8, 0xFF, 0xFF, 0x3F, 0x00, 0x05, 0xFE, 0x02, 0xFE, 0xDC, 0xCC, 0x59,
            0xE7, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
        ]
    }

    #[wasm_bindgen_test]
    fn test_load_and_rotate() {
        let mut engine = Engine::new();
        engine.load(&tiny_png(), "image/png").unwrap();
        assert!(engine.loaded());

        engine.rotate(90.0).unwrap();
        assert_eq!(engine.history_len(), 2);
        assert!(engine.can_undo());
    }

    #[wasm_bindgen_test]
    fn test_load_rejects_wrong_media_type() {
        let mut engine = Engine::new();
        assert!(engine.load(&tiny_png(), "text/plain").is_err());
    }

    #[wasm_bindgen_test]
    fn test_rotate_before_load_errors() {
        let mut engine = Engine::new();
        assert!(engine.rotate(90.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_unknown_flip_axis_errors() {
        let mut engine = Engine::new();
        engine.load(&tiny_png(), "image/png").unwrap();
        assert!(engine.flip("diagonal").is_err());
    }

    #[wasm_bindgen_test]
    fn test_export_png() {
        let mut engine = Engine::new();
        engine.load(&tiny_png(), "image/png").unwrap();

        let bytes = engine.export("png", 90).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[wasm_bindgen_test]
    fn test_export_unsupported_format() {
        let mut engine = Engine::new();
        engine.load(&tiny_png(), "image/png").unwrap();
        assert!(engine.export("tiff", 90).is_err());
    }
}
