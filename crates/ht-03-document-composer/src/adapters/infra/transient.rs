//! # Transient Files
//!
//! Scratch files that exist only while one document is composed. The file is
//! removed when the guard drops, whichever way the composition ends.

use crate::domain::errors::RenderError;
use std::io::{self, Write};
use std::path::Path;
use tempfile::{Builder, TempPath};

/// A scratch file deleted on drop. Deletion failures are logged, not raised.
#[derive(Debug)]
pub struct TransientFile {
    path: TempPath,
}

impl TransientFile {
    /// Create an empty scratch file named `<prefix>XXXX<suffix>` in `dir`.
    pub fn create(dir: &Path, prefix: &str, suffix: &str) -> Result<Self, RenderError> {
        Self::with_contents(dir, prefix, suffix, &[])
    }

    /// Create a scratch file holding `bytes`.
    pub fn with_contents(
        dir: &Path,
        prefix: &str,
        suffix: &str,
        bytes: &[u8],
    ) -> Result<Self, RenderError> {
        let scratch_err = |e: io::Error| RenderError::ScratchUnavailable {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        };

        let mut file = Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile_in(dir)
            .map_err(scratch_err)?;
        if !bytes.is_empty() {
            file.write_all(bytes).map_err(scratch_err)?;
            file.flush().map_err(scratch_err)?;
        }

        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TransientFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&*self.path) {
            Ok(()) => tracing::trace!("[ht-03] Released {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                "[ht-03] Failed to release transient file {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
