//! # Code Matrix
//!
//! Backend-neutral output of a scannable-code encoder: a square grid of
//! dark/light modules, row-major from the top-left.

use crate::domain::errors::EncodingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl CodeMatrix {
    /// Wrap a `width x width` grid of modules (`true` = dark).
    pub fn new(width: usize, modules: Vec<bool>) -> Result<Self, EncodingError> {
        if width == 0 || modules.len() != width * width {
            return Err(EncodingError::Unencodable {
                reason: format!(
                    "{} modules do not form a {}x{} grid",
                    modules.len(),
                    width,
                    width
                ),
            });
        }
        Ok(Self { width, modules })
    }

    /// Modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }
}
