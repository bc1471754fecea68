//! # Store Configuration

use std::time::Duration;

/// Configuration for the issuance register.
///
/// All configuration values have sensible defaults for a single-desk
/// deployment.
#[derive(Debug, Clone)]
pub struct RecordStoreConfig {
    /// Hold an exclusive process lock on the register (INVARIANT-5).
    ///
    /// Only honored when the `locking` feature is enabled.
    pub lock: bool,

    /// How long to wait for a lock held by another process (default: 2s).
    pub lock_timeout: Duration,

    /// `fsync` each appended row before reporting success (default: true).
    pub sync_writes: bool,
}

impl Default for RecordStoreConfig {
    fn default() -> Self {
        Self {
            lock: true,
            lock_timeout: Duration::from_secs(2),
            sync_writes: true,
        }
    }
}

impl RecordStoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the process lock.
    pub fn with_lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    /// Set the lock wait timeout.
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    /// Enable or disable per-row `fsync`.
    pub fn with_sync_writes(mut self, sync: bool) -> Self {
        self.sync_writes = sync;
        self
    }
}
