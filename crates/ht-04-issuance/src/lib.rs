//! # Issuance Pipeline (ht-04)
//!
//! Orchestrates one hall ticket request end to end.
//!
//! ## State Machine
//!
//! ```text
//! Validating → ComputingIdentity → CheckingDuplicate → Composing → Recording → Done
//!     │                                   │                 │            │
//!     └─ MissingFields                    └─ Duplicate      │            └─ RecordingFailed
//!                                            (Ok outcome)   └─ CompositionFailed
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Validation Gate | Incomplete fields cause no document and no record |
//! | 2 | Idempotent Rejection | Known identifiers never re-render or re-record |
//! | 3 | Record Follows Document | A row is appended only after the document exists |
//! | 4 | No Orphans | A document whose row failed to record is removed |
//! | 5 | Photo Released | The photo resource is dropped on every exit path |
//! | 6 | Atomic Check-Then-Act | Shared pipelines serialize whole requests |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - States, outcomes, errors, config
//! - `ports/` - Inbound issuance API, outbound photo source
//! - `adapters/` - Still-image photo source
//! - `service/` - `IssuancePipeline` and `SharedIssuancePipeline`

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::capture::{StillFileSource, UnavailableSource};
pub use domain::config::PipelineConfig;
pub use domain::errors::{CaptureError, PipelineError};
pub use domain::outcome::{IssuanceOutcome, IssuedTicket};
pub use domain::state::{PipelineState, RejectionReason};
pub use ports::inbound::IssuanceApi;
pub use ports::outbound::PhotoSource;
pub use service::{IssuancePipeline, SharedIssuancePipeline};
