//! # Domain Errors
//!
//! Error types for the issuance register.
//!
//! ## Design Principles
//!
//! - Each error maps to a specific invariant violation or failure mode
//! - Table-level failures carry the register path for operator messages
//! - No panics in domain logic (use Result instead)

use shared_types::Identifier;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during register operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordStoreError {
    /// The register could not be created, read or parsed on open.
    #[error("Register unavailable at {}: {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    /// A row could not be written. The index was left unchanged.
    #[error("Register write failed at {}: {reason}", .path.display())]
    StorageWriteError { path: PathBuf, reason: String },

    /// The identifier is already present (INVARIANT-4).
    #[error("Record already exists for {identifier}")]
    DuplicateRecord { identifier: Identifier },

    /// Another process holds the register (INVARIANT-5).
    #[error("Register locked{}: {}", .pid.map(|p| format!(" by process {}", p)).unwrap_or_default(), .path.display())]
    StorageLocked { pid: Option<u32>, path: PathBuf },
}

impl RecordStoreError {
    /// Whether the error came from the backing table rather than a rule.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            RecordStoreError::StorageUnavailable { .. } | RecordStoreError::StorageWriteError { .. }
        )
    }
}

/// Backing table errors (outbound port).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// I/O error during read/write.
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Header row does not match the register schema.
    #[error("unexpected header row: {found:?}")]
    HeaderMismatch { found: Vec<String> },

    /// A row could not be parsed.
    #[error("malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    /// A row could not be encoded.
    #[error("row encoding failed: {message}")]
    Encoding { message: String },
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordStoreError::StorageWriteError {
            path: PathBuf::from("/tmp/register.csv"),
            reason: "disk failure".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/register.csv"));
        assert!(msg.contains("disk failure"));
        assert!(err.is_storage_failure());
    }

    #[test]
    fn test_locked_display_with_pid() {
        let err = RecordStoreError::StorageLocked {
            pid: Some(42),
            path: PathBuf::from("register.csv.lock"),
        };
        assert_eq!(err.to_string(), "Register locked by process 42: register.csv.lock");
        assert!(!err.is_storage_failure());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let table_err: TableError = io.into();
        assert!(matches!(table_err, TableError::Io { message } if message.contains("denied")));
    }
}
