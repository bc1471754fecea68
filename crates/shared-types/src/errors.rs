//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors raised when parsing an identifier from untrusted text
/// (a persisted row, a CLI argument).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Wrong number of characters.
    #[error("Identifier must be {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Character outside `[0-9a-f]`.
    #[error("Identifier contains non-hex character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },
}
