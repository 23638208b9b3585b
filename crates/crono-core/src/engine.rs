//! The stateful editor engine.
//!
//! [`Editor`] ties the pipeline together: it owns the edit history, commits
//! transform results as snapshots, and serves the current surface to the
//! display and export paths. The data flow mirrors the UI session:
//!
//! load -> initial snapshot -> operation -> new surface -> snapshot ->
//! (optional) undo back to a previous snapshot.
//!
//! Everything is synchronous and single-threaded; the browser's async file
//! reads and blob writes happen on the other side of the WASM boundary.

use crate::adjustments::apply_filters;
use crate::decode::{self, DecodeError, FilterType, Surface};
use crate::encode::{self, EncodeError, ExportFormat};
use crate::history::History;
use crate::transform::{flip, rotate, FlipAxis};
use crate::viewport;
use crate::FilterAdjustments;

/// The image editor engine.
///
/// One instance per editing session. All operations except [`Editor::load`]
/// require a loaded image; calling them earlier is a programming error in
/// the caller and panics (see [`Editor::current`]).
#[derive(Debug, Default)]
pub struct Editor {
    history: History,
}

impl Editor {
    /// Create an editor with the default history cap.
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Create an editor retaining at most `cap` history snapshots.
    pub fn with_history_cap(cap: usize) -> Self {
        Self {
            history: History::with_cap(cap),
        }
    }

    /// Load a new original image, replacing any previous session state.
    ///
    /// The declared media type must carry the `image/` prefix; the payload
    /// must decode as a raster image. On success the history is reset and
    /// the decoded surface becomes the initial snapshot. On failure the
    /// previous state is left intact.
    ///
    /// Returns the decoded dimensions.
    pub fn load(&mut self, bytes: &[u8], media_type: &str) -> Result<(u32, u32), DecodeError> {
        if !decode::is_image_media_type(media_type) {
            return Err(DecodeError::NotAnImage(media_type.to_string()));
        }

        let surface = decode::decode_image(bytes)?;
        let dimensions = (surface.width, surface.height);

        self.history.reset();
        self.history.push(surface);
        Ok(dimensions)
    }

    /// True once an image has been loaded.
    pub fn is_loaded(&self) -> bool {
        !self.history.is_empty()
    }

    /// The current surface.
    ///
    /// # Panics
    ///
    /// Panics if no image has been loaded. Operations before a load are a
    /// precondition violation, not a recoverable error.
    pub fn current(&self) -> &Surface {
        self.history
            .current()
            .expect("editor operation invoked before an image was loaded")
    }

    /// The current surface, or `None` before the first load.
    pub fn surface(&self) -> Option<&Surface> {
        self.history.current()
    }

    /// Rotate the current image and commit the result.
    ///
    /// Positive angles rotate clockwise; ±90 degrees swap the dimensions.
    pub fn rotate(&mut self, degrees: f64) {
        let rotated = rotate(self.current(), degrees);
        self.history.push(rotated);
    }

    /// Mirror the current image along an axis and commit the result.
    pub fn flip(&mut self, axis: FlipAxis) {
        let flipped = flip(self.current(), axis);
        self.history.push(flipped);
    }

    /// Resample the current image to exact dimensions and commit the result.
    ///
    /// No aspect-ratio enforcement; the caller decides the target box.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), DecodeError> {
        let resized = decode::resize(self.current(), width, height, FilterType::Lanczos3)?;
        self.history.push(resized);
        Ok(())
    }

    /// Produce a filter preview of the current image without committing.
    ///
    /// Meant for live slider feedback: history length and cursor are
    /// untouched, so previews can be produced at any rate and discarded.
    pub fn preview_filters(&self, filters: &FilterAdjustments) -> Surface {
        apply_filters(self.current(), filters)
    }

    /// Commit a previously produced preview as the new current state.
    ///
    /// This is the only point at which a filter preview becomes undoable -
    /// typically called when the user releases a slider.
    pub fn commit_filters(&mut self, surface: Surface) {
        debug_assert!(self.is_loaded(), "commit before load");
        self.history.push(surface);
    }

    /// Step back one snapshot. Returns false when already at the oldest.
    pub fn undo(&mut self) -> bool {
        self.history.undo().is_some()
    }

    /// Step forward one snapshot. Returns false when already at the newest.
    pub fn redo(&mut self) -> bool {
        self.history.redo().is_some()
    }

    /// True if an undo would change the current surface.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True if a redo would change the current surface.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of retained history snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Encode the current surface for download.
    ///
    /// Always serializes the full-resolution surface, never the downscaled
    /// display copy.
    pub fn export(&self, format: ExportFormat, quality: u8) -> Result<Vec<u8>, EncodeError> {
        encode::encode(self.current(), format, quality)
    }

    /// Produce the display copy for a container of the given size.
    ///
    /// Aspect ratio preserved, never upscaled; `None` when the container is
    /// hidden (zero-sized).
    pub fn fit_view(&self, max_width: u32, max_height: u32) -> Option<Surface> {
        viewport::fit_surface(self.current(), max_width, max_height)
    }
}
