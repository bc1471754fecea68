//! # Issuance Outcomes

use chrono::NaiveDate;
use shared_types::Identifier;
use std::path::PathBuf;

/// A freshly issued hall ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedTicket {
    pub identifier: Identifier,
    pub document_path: PathBuf,
    pub issued_on: NaiveDate,
}

/// Non-error result of a request.
///
/// A duplicate is an expected business outcome, reported alongside success
/// rather than as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssuanceOutcome {
    Issued(IssuedTicket),
    Duplicate { identifier: Identifier },
}

impl IssuanceOutcome {
    pub fn identifier(&self) -> &Identifier {
        match self {
            IssuanceOutcome::Issued(ticket) => &ticket.identifier,
            IssuanceOutcome::Duplicate { identifier } => identifier,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, IssuanceOutcome::Duplicate { .. })
    }

    pub fn issued(&self) -> Option<&IssuedTicket> {
        match self {
            IssuanceOutcome::Issued(ticket) => Some(ticket),
            IssuanceOutcome::Duplicate { .. } => None,
        }
    }
}
