//! # Adapters Module
//!
//! Adapter implementations for the issuance register.
//!
//! ## Modules
//!
//! - `csv_table`: CSV file register (production)
//! - `memory`: In-memory register (tests)
//! - `lock`: Register process locking (single-writer guard)

mod csv_table;
#[cfg(feature = "locking")]
pub mod lock;
mod memory;

pub use csv_table::CsvRecordTable;
pub use memory::InMemoryRecordTable;
