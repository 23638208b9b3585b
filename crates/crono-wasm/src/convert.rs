//! Stateless conversion and codec bindings.
//!
//! The conversion page doesn't need a full editor session: it decodes each
//! dropped file and re-encodes it in the chosen target format. These
//! functions expose that path, plus the small helpers the download flow
//! uses to name and label files.

use wasm_bindgen::prelude::*;

use crono_core::decode;
use crono_core::encode::{self, ExportFormat};

use crate::types::JsSurface;

/// Decode an uploaded image into a surface.
///
/// The container format is guessed from the bytes; EXIF orientation is
/// applied for camera JPEGs.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsSurface, JsValue> {
    decode::decode_image(bytes)
        .map(JsSurface::from_surface)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a surface into the requested format.
#[wasm_bindgen]
pub fn encode_image(surface: &JsSurface, format: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
    let format = parse_format(format)?;
    encode::encode(&surface.to_surface(), format, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert an image file to another format in one step.
///
/// Decode plus encode; used per dropped file on the conversion page. A
/// failure for one file reports for that file only - the page keeps
/// processing the rest of the batch.
#[wasm_bindgen]
pub fn convert_image(bytes: &[u8], format: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
    let format = parse_format(format)?;
    let surface = decode::decode_image(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    encode::encode(&surface, format, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Names of the formats the export/convert path can produce.
#[wasm_bindgen]
pub fn supported_formats() -> Vec<String> {
    ExportFormat::ALL
        .iter()
        .map(|f| f.extension().to_string())
        .collect()
}

/// The MIME type for a target format name.
#[wasm_bindgen]
pub fn format_mime_type(format: &str) -> Result<String, JsValue> {
    Ok(parse_format(format)?.mime_type().to_string())
}

/// Build the download filename for an export: stem plus the format's
/// conventional extension.
#[wasm_bindgen]
pub fn suggested_filename(stem: &str, format: &str) -> Result<String, JsValue> {
    let format = parse_format(format)?;
    Ok(format!("{stem}.{}", format.extension()))
}

fn parse_format(format: &str) -> Result<ExportFormat, JsValue> {
    ExportFormat::from_name(format).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_formats_listing() {
        let formats = supported_formats();
        assert_eq!(formats, vec!["png", "jpg", "webp", "gif", "bmp"]);
    }

    #[test]
    fn test_round_trip_through_core() {
        // The JsValue-returning wrappers only run on wasm32; exercise the
        // conversion path through the core functions they delegate to.
        let surface = crono_core::decode::Surface::new(5, 3, vec![90u8; 5 * 3 * 3]);
        let jpeg = crono_core::encode::encode(&surface, ExportFormat::Jpeg, 90).unwrap();
        let decoded = crono_core::decode::decode_image(&jpeg).unwrap();
        assert_eq!((decoded.width, decoded.height), (5, 3));
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_convert_rejects_unsupported_target() {
        let result = convert_image(&[0u8; 4], "tiff", 90);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_suggested_filename() {
        assert_eq!(suggested_filename("photo", "jpeg").unwrap(), "photo.jpg");
        assert_eq!(suggested_filename("scan", "image/png").unwrap(), "scan.png");
    }

    #[wasm_bindgen_test]
    fn test_format_mime_type() {
        assert_eq!(format_mime_type("png").unwrap(), "image/png");
        assert!(format_mime_type("svg").is_err());
    }
}
