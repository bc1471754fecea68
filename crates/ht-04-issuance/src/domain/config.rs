//! # Pipeline Configuration

use std::path::PathBuf;

/// Configuration for the issuance pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory receiving `<identifier>.<ext>` documents, created on first
    /// use (default: `hall_tickets`).
    pub storage_dir: PathBuf,

    /// Delete a composed document when its row fails to record
    /// (default: true).
    pub remove_orphans: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("hall_tickets"),
            remove_orphans: true,
        }
    }
}

impl PipelineConfig {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_remove_orphans(mut self, remove: bool) -> Self {
        self.remove_orphans = remove;
        self
    }
}
