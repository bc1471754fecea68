//! # Shared Pipeline
//!
//! Thread-safe handle around one `IssuancePipeline`. The lock is held for the
//! whole request, so the duplicate check, composition and recording form a
//! single critical section (INVARIANT-6).

use super::IssuancePipeline;
use crate::domain::errors::PipelineError;
use crate::domain::outcome::IssuanceOutcome;
use crate::domain::state::PipelineState;
use crate::ports::inbound::IssuanceApi;
use ht_02_record_store::RecordStoreApi;
use ht_03_document_composer::DocumentComposerApi;
use parking_lot::{Mutex, MutexGuard};
use shared_types::{CandidateFields, Clock, PhotoResource};
use std::sync::Arc;

/// Cloneable, thread-safe issuance pipeline.
pub struct SharedIssuancePipeline<S, D, C>
where
    S: RecordStoreApi,
    D: DocumentComposerApi,
    C: Clock,
{
    inner: Arc<Mutex<IssuancePipeline<S, D, C>>>,
}

impl<S, D, C> Clone for SharedIssuancePipeline<S, D, C>
where
    S: RecordStoreApi,
    D: DocumentComposerApi,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, D, C> SharedIssuancePipeline<S, D, C>
where
    S: RecordStoreApi,
    D: DocumentComposerApi,
    C: Clock,
{
    pub fn new(pipeline: IssuancePipeline<S, D, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pipeline)),
        }
    }

    /// Run one request while holding the pipeline lock.
    pub fn issue(
        &self,
        fields: &CandidateFields,
        photo: Option<PhotoResource>,
    ) -> Result<IssuanceOutcome, PipelineError> {
        self.inner.lock().issue(fields, photo)
    }

    /// Exclusive access to the underlying pipeline, e.g. for register queries.
    pub fn lock(&self) -> MutexGuard<'_, IssuancePipeline<S, D, C>> {
        self.inner.lock()
    }

    pub fn last_state(&self) -> PipelineState {
        self.inner.lock().last_state()
    }
}

impl<S, D, C> IssuanceApi for SharedIssuancePipeline<S, D, C>
where
    S: RecordStoreApi,
    D: DocumentComposerApi,
    C: Clock,
{
    fn issue(
        &mut self,
        fields: &CandidateFields,
        photo: Option<PhotoResource>,
    ) -> Result<IssuanceOutcome, PipelineError> {
        SharedIssuancePipeline::issue(self, fields, photo)
    }
}
