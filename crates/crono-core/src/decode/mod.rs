//! Upload decoding for the Crono engine.
//!
//! This module provides functionality for:
//! - Validating the declared media type of an upload
//! - Decoding browser raster uploads (JPEG, PNG, WebP, GIF, BMP, ...)
//! - EXIF orientation correction for camera photos
//! - Resizing for display fitting and the resize operation
//!
//! # Architecture
//!
//! The decoding path is designed to be used from the browser via WASM
//! bindings. All operations are synchronous and single-threaded within WASM;
//! the asynchronous file read happens on the JS side before the bytes arrive
//! here.

mod resize;
mod types;
mod upload;

pub use resize::{resize, resize_to_fit};
pub use types::{DecodeError, FilterType, Orientation, Surface};
pub use upload::{decode_image, is_image_media_type};
