//! # Photo Sources
//!
//! `StillFileSource` stands in for a camera: each capture copies the current
//! still image published at a device path into a transient file.

use crate::domain::errors::CaptureError;
use crate::ports::outbound::PhotoSource;
use shared_types::PhotoResource;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Captures the still image found at a device path.
#[derive(Debug, Clone)]
pub struct StillFileSource {
    device: PathBuf,
    scratch_dir: PathBuf,
}

impl StillFileSource {
    /// Source reading `device`, staging captures in the system temp dir.
    pub fn new(device: impl Into<PathBuf>) -> Self {
        Self {
            device: device.into(),
            scratch_dir: std::env::temp_dir(),
        }
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    pub fn device(&self) -> &Path {
        &self.device
    }

    fn unavailable(&self, reason: impl ToString) -> CaptureError {
        CaptureError::DeviceUnavailable {
            device: self.device.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl PhotoSource for StillFileSource {
    fn capture(&self) -> Result<PhotoResource, CaptureError> {
        let frame = std::fs::read(&self.device).map_err(|e| self.unavailable(e))?;
        if frame.is_empty() {
            return Err(self.unavailable("no frame available"));
        }

        let suffix = self
            .device
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let mut staged = tempfile::Builder::new()
            .prefix("ht-capture-")
            .suffix(&suffix)
            .tempfile_in(&self.scratch_dir)
            .map_err(|e| self.unavailable(e))?;
        staged.write_all(&frame).map_err(|e| self.unavailable(e))?;

        tracing::debug!(
            "[ht-04] Captured {} bytes from {}",
            frame.len(),
            self.device.display()
        );
        Ok(PhotoResource::Captured(staged.into_temp_path()))
    }
}

/// Source with no device attached. Every capture fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableSource;

impl PhotoSource for UnavailableSource {
    fn capture(&self) -> Result<PhotoResource, CaptureError> {
        Err(CaptureError::DeviceUnavailable {
            device: "none".to_string(),
            reason: "no capture device configured".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_capture_stages_transient_copy() {
        let dir = TempDir::new().unwrap();
        let device = dir.path().join("frame.jpg");
        std::fs::write(&device, b"\xFF\xD8\xFFframe").unwrap();
        let scratch = TempDir::new().unwrap();

        let source = StillFileSource::new(&device).with_scratch_dir(scratch.path());
        let photo = source.capture().unwrap();
        let staged = photo.path().unwrap().to_path_buf();

        assert!(photo.is_transient());
        assert!(staged.starts_with(scratch.path()));
        assert_eq!(staged.extension().unwrap(), "jpg");
        assert_eq!(std::fs::read(&staged).unwrap(), b"\xFF\xD8\xFFframe");

        drop(photo);
        assert!(!staged.exists());
        assert!(device.exists());
    }

    #[test]
    fn test_missing_device() {
        let source = StillFileSource::new("/dev/no-such-camera");
        assert!(matches!(
            source.capture(),
            Err(CaptureError::DeviceUnavailable { .. })
        ));
    }

    #[test]
    fn test_empty_frame() {
        let dir = TempDir::new().unwrap();
        let device = dir.path().join("frame.jpg");
        std::fs::write(&device, b"").unwrap();

        let result = StillFileSource::new(&device).capture();
        assert!(matches!(result, Err(CaptureError::DeviceUnavailable { reason, .. }) if reason == "no frame available"));
    }

    #[test]
    fn test_unavailable_source() {
        assert!(UnavailableSource.capture().is_err());
    }
}
