//! # Inbound Port (Driving Port)
//!
//! The single call a front end makes per request.

use crate::domain::errors::PipelineError;
use crate::domain::outcome::IssuanceOutcome;
use shared_types::{CandidateFields, PhotoResource};

/// Primary API of the issuance pipeline.
pub trait IssuanceApi {
    /// Run one request to completion.
    ///
    /// The photo is consumed. It is released on every exit path, which
    /// deletes the file behind a `PhotoResource::Captured`.
    ///
    /// # Returns
    ///
    /// - `Ok(IssuanceOutcome::Issued(..))` for a new ticket
    /// - `Ok(IssuanceOutcome::Duplicate { .. })` if these fields were already issued
    /// - `Err(PipelineError)` for any other rejection
    fn issue(
        &mut self,
        fields: &CandidateFields,
        photo: Option<PhotoResource>,
    ) -> Result<IssuanceOutcome, PipelineError>;
}
