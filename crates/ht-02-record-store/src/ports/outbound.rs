//! # Outbound Ports (Driven Ports)
//!
//! The backing table the register persists to.
//!
//! Production: `CsvRecordTable` (adapters/csv_table.rs)
//! Testing: `InMemoryRecordTable` (adapters/memory.rs)

use crate::domain::errors::TableError;
use shared_types::IssuanceRecord;
use std::path::Path;

/// Abstract interface for the durable register table.
pub trait RecordTable: Send {
    /// Where the table lives, for error messages.
    fn location(&self) -> &Path;

    /// Create the table with its header if absent, otherwise read every row.
    fn load_or_create(&mut self) -> Result<Vec<IssuanceRecord>, TableError>;

    /// Append exactly one row.
    ///
    /// ## Atomicity
    ///
    /// Best effort at the row level: the row is fully encoded before a single
    /// write is issued.
    fn append_row(&mut self, record: &IssuanceRecord) -> Result<(), TableError>;

    /// Read every row in append order.
    fn read_rows(&self) -> Result<Vec<IssuanceRecord>, TableError>;
}
