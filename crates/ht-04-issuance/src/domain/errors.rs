//! # Pipeline Errors

use crate::domain::state::RejectionReason;
use ht_02_record_store::RecordStoreError;
use ht_03_document_composer::ComposeError;
use std::path::PathBuf;
use thiserror::Error;

/// A request that ended without issuing a ticket, other than a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// One or more candidate fields are empty. Nothing was written.
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    /// The document directory could not be created.
    #[error("Storage directory unavailable {}: {reason}", .path.display())]
    StorageDirUnavailable { path: PathBuf, reason: String },

    /// The document could not be composed. Nothing was recorded.
    #[error("Document composition failed: {0}")]
    CompositionFailed(#[source] ComposeError),

    /// The document was composed but its row was not recorded.
    #[error("Failed to record issuance: {source}")]
    RecordingFailed {
        #[source]
        source: RecordStoreError,
        /// Whether the composed document was deleted again.
        orphan_removed: bool,
    },
}

impl PipelineError {
    pub fn reason(&self) -> RejectionReason {
        match self {
            PipelineError::MissingFields { .. } => RejectionReason::MissingFields,
            PipelineError::StorageDirUnavailable { .. } => RejectionReason::StorageUnavailable,
            PipelineError::CompositionFailed(_) => RejectionReason::CompositionFailed,
            PipelineError::RecordingFailed { .. } => RejectionReason::RecordingFailed,
        }
    }
}

/// Failure reported by a photo source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Capture device {device} unavailable: {reason}")]
    DeviceUnavailable { device: String, reason: String },
}
