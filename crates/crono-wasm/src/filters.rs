//! Filter adjustment WASM bindings.
//!
//! Exposes the core `FilterAdjustments` parameters to TypeScript so the
//! slider panel can build a value to preview or commit. Values can also be
//! constructed from a plain `{ brightness: 120, blur: 2 }` object, with
//! missing fields keeping their identity defaults.

use wasm_bindgen::prelude::*;

/// Filter adjustments wrapper for JavaScript
#[wasm_bindgen]
#[derive(Default)]
pub struct FilterAdjustments {
    inner: crono_core::FilterAdjustments,
}

#[wasm_bindgen]
impl FilterAdjustments {
    /// Create new filter adjustments with identity values
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: crono_core::FilterAdjustments::new(),
        }
    }

    /// Build adjustments from a plain JS object; missing fields stay at
    /// their identity defaults.
    pub fn from_object(value: JsValue) -> Result<FilterAdjustments, JsValue> {
        let inner: crono_core::FilterAdjustments =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// True if every parameter is at its identity default
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Get brightness in percent (100 = identity)
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    /// Set brightness in percent
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    /// Get contrast in percent (100 = identity)
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    /// Set contrast in percent
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    /// Get saturation in percent (100 = identity)
    #[wasm_bindgen(getter)]
    pub fn saturate(&self) -> f32 {
        self.inner.saturate
    }

    /// Set saturation in percent
    #[wasm_bindgen(setter)]
    pub fn set_saturate(&mut self, value: f32) {
        self.inner.saturate = value;
    }

    /// Get grayscale amount in percent (0 = identity)
    #[wasm_bindgen(getter)]
    pub fn grayscale(&self) -> f32 {
        self.inner.grayscale
    }

    /// Set grayscale amount in percent
    #[wasm_bindgen(setter)]
    pub fn set_grayscale(&mut self, value: f32) {
        self.inner.grayscale = value;
    }

    /// Get sepia amount in percent (0 = identity)
    #[wasm_bindgen(getter)]
    pub fn sepia(&self) -> f32 {
        self.inner.sepia
    }

    /// Set sepia amount in percent
    #[wasm_bindgen(setter)]
    pub fn set_sepia(&mut self, value: f32) {
        self.inner.sepia = value;
    }

    /// Get blur radius in pixels (0 = identity)
    #[wasm_bindgen(getter)]
    pub fn blur(&self) -> f32 {
        self.inner.blur
    }

    /// Set blur radius in pixels
    #[wasm_bindgen(setter)]
    pub fn set_blur(&mut self, value: f32) {
        self.inner.blur = value;
    }

    /// Get hue rotation in degrees (0 = identity)
    #[wasm_bindgen(getter)]
    pub fn hue_rotate(&self) -> f32 {
        self.inner.hue_rotate
    }

    /// Set hue rotation in degrees
    #[wasm_bindgen(setter)]
    pub fn set_hue_rotate(&mut self, value: f32) {
        self.inner.hue_rotate = value;
    }
}

impl FilterAdjustments {
    /// Borrow the wrapped core value.
    pub(crate) fn as_core(&self) -> &crono_core::FilterAdjustments {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_identity() {
        let filters = FilterAdjustments::new();
        assert!(filters.is_identity());
        assert_eq!(filters.brightness(), 100.0);
        assert_eq!(filters.grayscale(), 0.0);
    }

    #[test]
    fn test_setters_update_core_value() {
        let mut filters = FilterAdjustments::new();
        filters.set_brightness(140.0);
        filters.set_blur(2.5);

        assert!(!filters.is_identity());
        assert_eq!(filters.as_core().brightness, 140.0);
        assert_eq!(filters.as_core().blur, 2.5);
    }
}
