//! # Outbound Ports (Driven Ports)
//!
//! Backends the composer needs the host to provide.

use crate::domain::code::CodeMatrix;
use crate::domain::errors::{EncodingError, RenderError};
use crate::domain::layout::PageLayout;
use std::path::Path;

/// Turns a page description into a document file.
///
/// Production: `PdfPageRenderer`
/// Testing: `RecordingRenderer`, `FailingRenderer`
pub trait PageRenderer: Send + Sync {
    /// Extension of the files this renderer writes, without the dot.
    fn extension(&self) -> &'static str;

    /// Render `layout` to `destination`.
    ///
    /// Image sources named by the layout exist for the duration of the call
    /// only. Implementations must not keep paths to them.
    fn render(&self, layout: &PageLayout, destination: &Path) -> Result<(), RenderError>;
}

/// Encodes text into a scannable code.
///
/// Production: `QrCodeEncoder`
/// Testing: `StaticEncoder`, `FailingEncoder`
pub trait CodeEncoder: Send + Sync {
    fn encode(&self, payload: &str) -> Result<CodeMatrix, EncodingError>;
}
