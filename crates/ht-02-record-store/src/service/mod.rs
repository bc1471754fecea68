//! # Record Store Service
//!
//! The main service implementing the register API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Owns the backing table and the identifier index together
//! 2. Builds the index once, on open, from every persisted row
//! 3. Implements `RecordStoreApi` enforcing the register invariants
//! 4. Optionally holds the process lock for its whole lifetime


use crate::adapters::CsvRecordTable;
use crate::domain::config::RecordStoreConfig;
use crate::domain::errors::{RecordStoreError, TableError};
use crate::domain::index::IdentifierIndex;
use crate::ports::inbound::RecordStoreApi;
use crate::ports::outbound::RecordTable;
use shared_types::{Identifier, IssuanceRecord};
use std::path::Path;

#[cfg(feature = "locking")]
use crate::adapters::lock::{LockError, TableLock};

/// The issuance register: durable table plus in-memory duplicate index.
pub struct RecordStore<T: RecordTable> {
    /// Backing table for persistence.
    pub(crate) table: T,
    /// Mirror of persisted identifiers (INVARIANT-1).
    pub(crate) index: IdentifierIndex,
    /// Rows in the table, including any repeated identifiers.
    pub(crate) row_count: usize,
    /// Held for the lifetime of the store (INVARIANT-5).
    #[cfg(feature = "locking")]
    _lock: Option<TableLock>,
}

impl RecordStore<CsvRecordTable> {
    /// Open the CSV register at `location` with default configuration.
    ///
    /// Creates the file (and its parent directories) with the header row if
    /// absent, otherwise loads and indexes every row.
    pub fn open<P: AsRef<Path>>(location: P) -> Result<Self, RecordStoreError> {
        Self::open_with_config(location, RecordStoreConfig::default())
    }

    /// Open the CSV register at `location`.
    pub fn open_with_config<P: AsRef<Path>>(
        location: P,
        config: RecordStoreConfig,
    ) -> Result<Self, RecordStoreError> {
        let location = location.as_ref();

        #[cfg(feature = "locking")]
        let lock = if config.lock {
            Some(Self::acquire_lock(location, &config)?)
        } else {
            None
        };

        let table = CsvRecordTable::new(location).with_sync_writes(config.sync_writes);
        let mut store = Self::with_table(table)?;

        #[cfg(feature = "locking")]
        {
            store._lock = lock;
        }
        Ok(store)
    }

    #[cfg(feature = "locking")]
    fn acquire_lock(
        location: &Path,
        config: &RecordStoreConfig,
    ) -> Result<TableLock, RecordStoreError> {
        if let Some(parent) = location.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RecordStoreError::StorageUnavailable {
                        path: location.to_path_buf(),
                        reason: e.to_string(),
                    }
                })?;
            }
        }

        TableLock::acquire(location, config.lock_timeout).map_err(|e| match e {
            LockError::AlreadyLocked { pid, path } => RecordStoreError::StorageLocked { pid, path },
            other => RecordStoreError::StorageUnavailable {
                path: location.to_path_buf(),
                reason: other.to_string(),
            },
        })
    }
}

impl<T: RecordTable> RecordStore<T> {
    /// Build a store over an arbitrary backing table, loading its rows.
    pub fn with_table(mut table: T) -> Result<Self, RecordStoreError> {
        let rows = table
            .load_or_create()
            .map_err(|e| Self::unavailable(&table, e))?;

        let row_count = rows.len();
        let (index, repeated) =
            IdentifierIndex::from_persisted(rows.into_iter().map(|row| row.identifier));
        for id in &repeated {
            tracing::warn!(
                "[ht-02] Register {} holds more than one row for {}",
                table.location().display(),
                id.short()
            );
        }

        tracing::info!(
            "[ht-02] Register ready: {} issued tickets indexed from {}",
            index.len(),
            table.location().display()
        );

        Ok(Self {
            table,
            index,
            row_count,
            #[cfg(feature = "locking")]
            _lock: None,
        })
    }

    /// Where the backing table lives.
    pub fn location(&self) -> &Path {
        self.table.location()
    }

    fn unavailable(table: &T, err: TableError) -> RecordStoreError {
        RecordStoreError::StorageUnavailable {
            path: table.location().to_path_buf(),
            reason: err.to_string(),
        }
    }
}

impl<T: RecordTable> RecordStoreApi for RecordStore<T> {
    fn contains(&self, id: &Identifier) -> bool {
        let known = self.index.contains(id);
        tracing::debug!("[ht-02] Lookup {} -> {}", id.short(), known);
        known
    }

    fn append(&mut self, record: IssuanceRecord) -> Result<(), RecordStoreError> {
        // INVARIANT-4: never write a second row for an identifier
        if self.index.contains(&record.identifier) {
            return Err(RecordStoreError::DuplicateRecord {
                identifier: record.identifier,
            });
        }

        // INVARIANT-2: write first, index after
        self.table
            .append_row(&record)
            .map_err(|e| RecordStoreError::StorageWriteError {
                path: self.table.location().to_path_buf(),
                reason: e.to_string(),
            })?;

        tracing::info!(
            "[ht-02] Recorded ticket {} for roll number {}",
            record.identifier.short(),
            record.roll_number
        );
        self.index.insert(record.identifier);
        self.row_count += 1;
        Ok(())
    }

    fn len(&self) -> usize {
        self.row_count
    }

    fn find(&self, id: &Identifier) -> Result<Option<IssuanceRecord>, RecordStoreError> {
        if !self.index.contains(id) {
            return Ok(None);
        }
        Ok(self
            .records()?
            .into_iter()
            .find(|record| &record.identifier == id))
    }

    fn records(&self) -> Result<Vec<IssuanceRecord>, RecordStoreError> {
        self.table
            .read_rows()
            .map_err(|e| Self::unavailable(&self.table, e))
    }
}
