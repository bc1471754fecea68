//! # Issuance Pipeline Service
//!
//! Runs the request state machine over the identity hasher, the register and
//! the document composer.

mod shared;

pub use shared::SharedIssuancePipeline;

use crate::domain::config::PipelineConfig;
use crate::domain::errors::PipelineError;
use crate::domain::outcome::{IssuanceOutcome, IssuedTicket};
use crate::domain::state::{PipelineState, RejectionReason};
use crate::ports::inbound::IssuanceApi;
use ht_01_identity::IdentityHasher;
use ht_02_record_store::{RecordStoreApi, RecordStoreError};
use ht_03_document_composer::DocumentComposerApi;
use shared_types::{CandidateFields, Clock, Identifier, IssuanceRecord, PhotoResource};
use std::path::{Path, PathBuf};

/// The issuance pipeline.
///
/// Owns the register and the composer for its whole lifetime. Requests run
/// one at a time through `&mut self`. Wrap in `SharedIssuancePipeline` to
/// serve several threads.
pub struct IssuancePipeline<S, D, C>
where
    S: RecordStoreApi,
    D: DocumentComposerApi,
    C: Clock,
{
    hasher: IdentityHasher,
    store: S,
    composer: D,
    clock: C,
    config: PipelineConfig,
    state: PipelineState,
}

impl<S, D, C> IssuancePipeline<S, D, C>
where
    S: RecordStoreApi,
    D: DocumentComposerApi,
    C: Clock,
{
    pub fn new(store: S, composer: D, clock: C, config: PipelineConfig) -> Self {
        Self {
            hasher: IdentityHasher::new(),
            store,
            composer,
            clock,
            config,
            state: PipelineState::Idle,
        }
    }

    /// The register, for queries.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn composer(&self) -> &D {
        &self.composer
    }

    pub fn storage_dir(&self) -> &Path {
        &self.config.storage_dir
    }

    /// Terminal state of the most recent request (`Idle` before the first).
    pub fn last_state(&self) -> PipelineState {
        self.state
    }

    /// Where the document for `id` is written.
    pub fn document_path(&self, id: &Identifier) -> PathBuf {
        self.config
            .storage_dir
            .join(format!("{}.{}", id, self.composer.extension()))
    }

    fn enter(&mut self, next: PipelineState) {
        tracing::trace!("[ht-04] {} -> {}", self.state, next);
        self.state = next;
    }

    fn reject(&mut self, err: PipelineError) -> PipelineError {
        tracing::warn!("[ht-04] Request rejected in {}: {}", self.state, err);
        self.state = PipelineState::Rejected(err.reason());
        err
    }

    fn ensure_storage_dir(&self) -> Result<(), PipelineError> {
        std::fs::create_dir_all(&self.config.storage_dir).map_err(|e| {
            PipelineError::StorageDirUnavailable {
                path: self.config.storage_dir.clone(),
                reason: e.to_string(),
            }
        })
    }

    /// Best-effort removal of a document whose row was not recorded.
    fn remove_orphan(&self, document: &Path, cause: &RecordStoreError) -> bool {
        // Only a failed write leaves the file unowned; a refused duplicate
        // means it belongs to the existing row
        if !self.config.remove_orphans || !cause.is_storage_failure() {
            return false;
        }
        match std::fs::remove_file(document) {
            Ok(()) => {
                tracing::info!("[ht-04] Removed unrecorded document {}", document.display());
                true
            }
            Err(e) => {
                tracing::warn!(
                    "[ht-04] Failed to remove unrecorded document {}: {}",
                    document.display(),
                    e
                );
                false
            }
        }
    }
}

impl<S, D, C> IssuanceApi for IssuancePipeline<S, D, C>
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
        // INVARIANT-5: `photo` is owned here and dropped on every return

        self.enter(PipelineState::Validating);
        let missing = fields.missing_fields();
        if !missing.is_empty() {
            return Err(self.reject(PipelineError::MissingFields { fields: missing }));
        }

        self.enter(PipelineState::ComputingIdentity);
        let identifier = self.hasher.identify(fields);

        self.enter(PipelineState::CheckingDuplicate);
        if self.store.contains(&identifier) {
            self.state = PipelineState::Rejected(RejectionReason::DuplicateTicket);
            tracing::info!(
                "[ht-04] Ticket {} already issued for roll number {}",
                identifier.short(),
                fields.roll_number
            );
            return Ok(IssuanceOutcome::Duplicate { identifier });
        }

        self.enter(PipelineState::Composing);
        let issued_on = self.clock.today();
        let document_path = self.document_path(&identifier);
        if let Err(e) = self.ensure_storage_dir() {
            return Err(self.reject(e));
        }
        let composed =
            self.composer
                .compose(fields, photo.as_ref(), &document_path, issued_on);
        drop(photo);
        if let Err(e) = composed {
            return Err(self.reject(PipelineError::CompositionFailed(e)));
        }

        // INVARIANT-3: the document exists before its row is written
        self.enter(PipelineState::Recording);
        let record = IssuanceRecord::new(fields, &document_path, identifier.clone(), issued_on);
        if let Err(source) = self.store.append(record) {
            let orphan_removed = self.remove_orphan(&document_path, &source);
            return Err(self.reject(PipelineError::RecordingFailed {
                source,
                orphan_removed,
            }));
        }

        self.enter(PipelineState::Done);
        tracing::info!(
            "[ht-04] Issued ticket {} for roll number {} at {}",
            identifier.short(),
            fields.roll_number,
            document_path.display()
        );
        Ok(IssuanceOutcome::Issued(IssuedTicket {
            identifier,
            document_path,
            issued_on,
        }))
    }
}
