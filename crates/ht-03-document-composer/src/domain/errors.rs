//! # Composer Errors
//!
//! `RenderError` and `EncodingError` are distinct failure classes. Callers see
//! them wrapped in `ComposeError`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce the page or one of its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The destination's parent is missing or not a directory.
    #[error("Destination directory unavailable: {}", .path.display())]
    DestinationUnavailable { path: PathBuf },

    /// Writing the document failed.
    #[error("Failed to write document {}: {reason}", .path.display())]
    WriteFailed { path: PathBuf, reason: String },

    /// The scratch directory for transient files cannot be used.
    #[error("Scratch directory unavailable {}: {reason}", .path.display())]
    ScratchUnavailable { path: PathBuf, reason: String },

    /// An image could not be read or decoded.
    #[error("Unreadable image {source_name}: {reason}")]
    ImageDecode { source_name: String, reason: String },

    /// The page description could not be built.
    #[error("Layout failed: {0}")]
    Layout(String),

    /// The rendering backend rejected the page.
    #[error("Renderer failed: {0}")]
    Backend(String),
}

/// Failure to encode the scannable-code payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Payload exceeds the capacity of the largest code version.
    #[error("Payload of {length} bytes does not fit in a scannable code")]
    PayloadTooLong { length: usize },

    /// Any other encoder refusal.
    #[error("Payload cannot be encoded: {reason}")]
    Unencodable { reason: String },
}

/// Error returned by `DocumentComposerApi::compose`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Failure to load or apply an exam schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Failed to read schedule {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Invalid schedule: {0}")]
    Parse(String),

    #[error("Schedule item {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("Exam date for {label} is outside the supported calendar")]
    DateOutOfRange { label: String },
}
