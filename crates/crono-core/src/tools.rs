//! Seam for external processing tools.
//!
//! The toolset site hands some jobs to third-party libraries: background
//! removal, format conversion fallbacks, PDF embedding. To the engine each
//! of those is an opaque `(bytes, options) -> bytes` function that may
//! report progress along the way. This module pins that contract as a trait
//! so the rest of the system never depends on a collaborator's internals.

use thiserror::Error;

/// Error raised by an external tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The collaborator reported a failure for this input.
    #[error("{tool} failed: {message}")]
    Failed { tool: String, message: String },
}

impl ToolError {
    /// Convenience constructor used by tool implementations.
    pub fn failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        ToolError::Failed {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// An external `(bytes, options) -> bytes` processing tool.
///
/// Implementations wrap whatever third-party library does the actual work.
/// `progress` is invoked with `(current, total)` as the tool advances; tools
/// with no progress notion may never call it.
pub trait ImageTool {
    /// Human-readable tool name, used in per-file error reporting.
    fn name(&self) -> &str;

    /// Process one input blob into one output blob.
    fn process(
        &self,
        input: &[u8],
        progress: &mut dyn FnMut(u32, u32),
    ) -> Result<Vec<u8>, ToolError>;
}

/// Run a tool over a batch of inputs, one result per input.
///
/// A failing input produces its own `Err` entry; the remaining files are
/// still processed. The batch as a whole never aborts.
pub fn run_batch<T>(tool: &T, inputs: &[Vec<u8>]) -> Vec<Result<Vec<u8>, ToolError>>
where
    T: ImageTool + ?Sized,
{
    inputs
        .iter()
        .map(|input| tool.process(input, &mut |_, _| {}))
        .collect()
}
