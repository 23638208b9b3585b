//! Crono WASM - WebAssembly bindings for the CronoTools image engine
//!
//! This crate exposes the crono-core functionality to the browser UI as a
//! stateful editor class plus stateless codec helpers.
//!
//! # Module Structure
//!
//! - `engine` - The stateful editor session (load, transforms, undo, export)
//! - `filters` - Filter adjustment parameters for the slider panel
//! - `convert` - Stateless decode/encode/convert helpers for the converter page
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { Engine, FilterAdjustments } from '@crono/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const engine = new Engine();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! engine.load(bytes, file.type);
//!
//! // Live preview while a slider moves, commit on release
//! const filters = new FilterAdjustments();
//! filters.brightness = 130;
//! const preview = engine.preview_filters(filters);
//! engine.commit_filters(preview);
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod engine;
mod filters;
mod types;

// Re-export public types
pub use convert::{
    convert_image, decode_image, encode_image, format_mime_type, suggested_filename,
    supported_formats,
};
pub use engine::Engine;
pub use filters::FilterAdjustments;
pub use types::JsSurface;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
