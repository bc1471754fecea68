//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the issuance register.

use crate::domain::errors::RecordStoreError;
use shared_types::{Identifier, IssuanceRecord};

/// Primary API for the issuance register.
///
/// Implementations must enforce all domain invariants.
pub trait RecordStoreApi {
    /// Whether an issuance with this identifier has been recorded.
    ///
    /// O(1) lookup against the in-memory index. No I/O, no side effects.
    fn contains(&self, id: &Identifier) -> bool;

    /// Durably append one record.
    ///
    /// ## Ordering (INVARIANT-2)
    ///
    /// The row is written first; the identifier enters the index only after
    /// the write succeeded.
    ///
    /// ## Errors
    ///
    /// - `DuplicateRecord`: identifier already present, nothing written
    /// - `StorageWriteError`: the row could not be written, index unchanged
    fn append(&mut self, record: IssuanceRecord) -> Result<(), RecordStoreError>;

    /// Number of records in the register.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a record by identifier (reads the backing table).
    fn find(&self, id: &Identifier) -> Result<Option<IssuanceRecord>, RecordStoreError>;

    /// All records in append order (reads the backing table).
    fn records(&self) -> Result<Vec<IssuanceRecord>, RecordStoreError>;
}
