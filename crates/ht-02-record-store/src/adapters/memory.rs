use crate::domain::errors::TableError;
use crate::ports::outbound::RecordTable;
use shared_types::IssuanceRecord;
use std::path::Path;

/// In-memory register table for unit tests.
///
/// Can be told to fail appends, to exercise write-failure paths.
#[derive(Debug, Default)]
pub struct InMemoryRecordTable {
    rows: Vec<IssuanceRecord>,
    fail_appends: bool,
}

impl InMemoryRecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing rows, as if loaded from disk.
    pub fn with_rows(rows: Vec<IssuanceRecord>) -> Self {
        Self {
            rows,
            fail_appends: false,
        }
    }

    /// A table whose appends always fail.
    pub fn failing() -> Self {
        Self {
            rows: Vec::new(),
            fail_appends: true,
        }
    }

    /// Toggle append failures.
    pub fn set_fail_appends(&mut self, fail: bool) {
        self.fail_appends = fail;
    }
}

impl RecordTable for InMemoryRecordTable {
    fn location(&self) -> &Path {
        Path::new(":memory:")
    }

    fn load_or_create(&mut self) -> Result<Vec<IssuanceRecord>, TableError> {
        Ok(self.rows.clone())
    }

    fn append_row(&mut self, record: &IssuanceRecord) -> Result<(), TableError> {
        if self.fail_appends {
            return Err(TableError::Io {
                message: "simulated write failure".to_string(),
            });
        }
        self.rows.push(record.clone());
        Ok(())
    }

    fn read_rows(&self) -> Result<Vec<IssuanceRecord>, TableError> {
        Ok(self.rows.clone())
    }
}
