//! # Test Doubles
//!
//! In-process renderers and encoders for exercising the composer and the
//! issuance pipeline without a PDF backend.

use crate::domain::code::CodeMatrix;
use crate::domain::errors::{EncodingError, RenderError};
use crate::domain::layout::{LayoutElement, PageLayout};
use crate::ports::outbound::{CodeEncoder, PageRenderer};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Contents written by `RecordingRenderer`.
pub const PLACEHOLDER_DOCUMENT: &[u8] = b"%PDF-placeholder\n";

/// One call observed by `RecordingRenderer`.
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub layout: PageLayout,
    pub destination: PathBuf,
    /// Whether every image source existed while rendering.
    pub images_present: bool,
}

/// Renderer that records each layout and writes a placeholder document.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<RenderCall>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl PageRenderer for RecordingRenderer {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, layout: &PageLayout, destination: &Path) -> Result<(), RenderError> {
        let images_present = layout.elements.iter().all(|element| match element {
            LayoutElement::Image { source, .. } => source.is_file(),
            LayoutElement::Text { .. } => true,
        });

        std::fs::write(destination, PLACEHOLDER_DOCUMENT).map_err(|e| {
            RenderError::WriteFailed {
                path: destination.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        self.calls.lock().push(RenderCall {
            layout: layout.clone(),
            destination: destination.to_path_buf(),
            images_present,
        });
        Ok(())
    }
}

/// Renderer that always fails without touching the destination.
#[derive(Debug, Clone)]
pub struct FailingRenderer {
    reason: String,
}

impl FailingRenderer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for FailingRenderer {
    fn default() -> Self {
        Self::new("simulated render failure")
    }
}

impl PageRenderer for FailingRenderer {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, _layout: &PageLayout, _destination: &Path) -> Result<(), RenderError> {
        Err(RenderError::Backend(self.reason.clone()))
    }
}

/// Encoder returning a fixed finder-like pattern and recording payloads.
#[derive(Debug, Default)]
pub struct StaticEncoder {
    payloads: Mutex<Vec<String>>,
}

impl StaticEncoder {
    /// Modules per side of the returned matrix.
    pub const WIDTH: usize = 21;

    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads seen so far, in call order.
    pub fn payloads(&self) -> Vec<String> {
        self.payloads.lock().clone()
    }
}

impl CodeEncoder for StaticEncoder {
    fn encode(&self, payload: &str) -> Result<CodeMatrix, EncodingError> {
        self.payloads.lock().push(payload.to_string());
        let width = Self::WIDTH;
        let modules = (0..width * width)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                x == 0 || y == 0 || x == width - 1 || y == width - 1 || (x + y) % 3 == 0
            })
            .collect();
        CodeMatrix::new(width, modules)
    }
}

/// Encoder that refuses every payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingEncoder;

impl CodeEncoder for FailingEncoder {
    fn encode(&self, payload: &str) -> Result<CodeMatrix, EncodingError> {
        Err(EncodingError::PayloadTooLong {
            length: payload.len(),
        })
    }
}
