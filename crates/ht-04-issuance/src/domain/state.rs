//! # Pipeline States

use std::fmt;

/// Why a request ended before `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    MissingFields,
    DuplicateTicket,
    StorageUnavailable,
    CompositionFailed,
    RecordingFailed,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RejectionReason::MissingFields => "missing fields",
            RejectionReason::DuplicateTicket => "duplicate ticket",
            RejectionReason::StorageUnavailable => "storage unavailable",
            RejectionReason::CompositionFailed => "composition failed",
            RejectionReason::RecordingFailed => "recording failed",
        };
        f.write_str(name)
    }
}

/// Stage of an issuance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// No request has run yet.
    #[default]
    Idle,
    Validating,
    ComputingIdentity,
    CheckingDuplicate,
    Composing,
    Recording,
    Done,
    Rejected(RejectionReason),
}

impl PipelineState {
    /// Whether a request in this state has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Rejected(_))
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => f.write_str("Idle"),
            PipelineState::Validating => f.write_str("Validating"),
            PipelineState::ComputingIdentity => f.write_str("ComputingIdentity"),
            PipelineState::CheckingDuplicate => f.write_str("CheckingDuplicate"),
            PipelineState::Composing => f.write_str("Composing"),
            PipelineState::Recording => f.write_str("Recording"),
            PipelineState::Done => f.write_str("Done"),
            PipelineState::Rejected(reason) => write!(f, "Rejected({})", reason),
        }
    }
}
