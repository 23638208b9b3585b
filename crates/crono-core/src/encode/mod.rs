//! Export encoding for the Crono engine.
//!
//! This module serializes the current surface into an encoded image blob for
//! client-side download. The set of producible formats is fixed; asking for
//! anything outside it fails with [`EncodeError::UnsupportedFormat`] rather
//! than falling back to a different format silently.

mod format;
mod raster;

pub use format::{EncodeError, ExportFormat};
pub use raster::encode;
