//! # Inbound Port (Driving Port)

use crate::domain::errors::ComposeError;
use chrono::NaiveDate;
use shared_types::{CandidateFields, PhotoResource};
use std::path::Path;

/// Primary API of the document composer.
pub trait DocumentComposerApi: Send + Sync {
    /// File extension of produced documents, without the dot.
    fn extension(&self) -> &str;

    /// Write one hall ticket to `destination`, overwriting any existing file.
    ///
    /// Exam dates are computed from `issued_on`. An absent or unavailable
    /// `photo` is left off the page.
    ///
    /// Every transient resource used along the way is released before this
    /// returns, on success and on failure.
    ///
    /// # Errors
    ///
    /// - `ComposeError::Render` if the destination's parent directory is
    ///   missing or unwritable, or the page cannot be produced
    /// - `ComposeError::Encoding` if the roll number cannot be encoded
    fn compose(
        &self,
        fields: &CandidateFields,
        photo: Option<&PhotoResource>,
        destination: &Path,
        issued_on: NaiveDate,
    ) -> Result<(), ComposeError>;
}
