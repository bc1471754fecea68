//! # Issuance Register (ht-02)
//!
//! The Record Store is the authoritative persistence layer for issued hall
//! tickets and the source of truth for duplicate detection.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!  contains(id) ─→│ IdentifierIndex (HashSet)    │  O(1), no I/O
//!                 └──────────────────────────────┘
//!                          ↑ insert after write succeeds
//!  append(rec) ──→ encode row ──→ single append write ──→ register file
//!                                                        (CSV, header row)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Mirror Index | Index holds exactly the persisted identifiers |
//! | 2 | Write Before Index | Index is updated only after the row is on disk |
//! | 3 | Append Only | Rows are never updated or deleted |
//! | 4 | Unique Rows | Appending a known identifier fails with `DuplicateRecord` |
//! | 5 | Single Writer | One process holds the register lock at a time |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Register schema, index, config, errors
//! - `ports/` - Port traits (inbound API, outbound table SPI)
//! - `adapters/` - CSV file table, in-memory table, process lock
//! - `service/` - `RecordStore` implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use ht_02_record_store::{RecordStore, RecordStoreApi};
//!
//! let mut store = RecordStore::open("hall_tickets_record.csv")?;
//! if !store.contains(&record.identifier) {
//!     store.append(record)?;
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::{CsvRecordTable, InMemoryRecordTable};
pub use domain::config::RecordStoreConfig;
pub use domain::errors::{RecordStoreError, TableError};
pub use domain::index::IdentifierIndex;
pub use domain::schema::TABLE_HEADER;
pub use ports::inbound::RecordStoreApi;
pub use ports::outbound::RecordTable;
pub use service::RecordStore;

#[cfg(feature = "locking")]
pub use adapters::lock::{LockError, TableLock};
