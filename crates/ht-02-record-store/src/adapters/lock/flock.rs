//! # File Lock Implementation
//!
//! Uses `fs2` for cross-platform file locking (flock on Unix, LockFile on Windows).

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use fs2::FileExt;

use super::security::{lock_path_for, INITIAL_RETRY_DELAY, MAX_RETRY_DELAY};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors from register locking
#[derive(Debug)]
pub enum LockError {
    /// Lock file could not be created
    CreateFailed(io::Error),
    /// Register is already locked by another holder
    AlreadyLocked { pid: Option<u32>, path: PathBuf },
    /// Failed to write PID to lock file
    WriteFailed(io::Error),
}

impl std::fmt::Display for LockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockError::CreateFailed(e) => write!(f, "Failed to create lock file: {}", e),
            LockError::AlreadyLocked { pid, path } => {
                if let Some(p) = pid {
                    write!(
                        f,
                        "Register already in use by process {} ({})",
                        p,
                        path.display()
                    )
                } else {
                    write!(f, "Register already in use ({})", path.display())
                }
            }
            LockError::WriteFailed(e) => write!(f, "Failed to write PID to lock file: {}", e),
        }
    }
}

impl std::error::Error for LockError {}

// =============================================================================
// TABLE LOCK
// =============================================================================

/// Exclusive lock on a register file.
///
/// Acquired when the store opens, released on drop (RAII). The lock file
/// itself is left in place.
///
/// # Example
///
/// ```ignore
/// let lock = TableLock::acquire(Path::new("hall_tickets_record.csv"), Duration::ZERO)?;
/// // Lock is held until `lock` goes out of scope
/// ```
pub struct TableLock {
    /// The lock file handle (kept open to maintain lock)
    file: File,
    /// Path to the lock file
    path: PathBuf,
    /// PID of this process
    pid: u32,
}

impl TableLock {
    /// Acquire an exclusive lock on the register at `table_path`.
    ///
    /// Retries with exponential backoff until `timeout` elapses. The lock file
    /// is never unlinked while contended: the kernel drops a dead holder's
    /// flock, so a failed `try_lock` always means a live holder, whatever PID
    /// the file records. The PID is only reported in the error.
    ///
    /// Relies on advisory `flock` semantics, which network filesystems may
    /// not honour across hosts.
    ///
    /// # Errors
    ///
    /// Returns `LockError::AlreadyLocked` if another holder keeps the lock
    /// past the timeout.
    pub fn acquire(table_path: &Path, timeout: Duration) -> Result<Self, LockError> {
        let deadline = Instant::now() + timeout;
        let lock_path = lock_path_for(table_path);
        let mut retry_delay = INITIAL_RETRY_DELAY;

        loop {
            // Opened without truncation so the holder's PID stays readable
            let file = OpenOptions::new()
                .create(true)
                .read(true)
                .write(true)
                .truncate(false)
                .open(&lock_path)
                .map_err(LockError::CreateFailed)?;

            match file.try_lock_exclusive() {
                Ok(()) => {
                    // Success - replace any previous PID with ours
                    let pid = std::process::id();
                    let mut locked_file = file;
                    locked_file.set_len(0).map_err(LockError::WriteFailed)?;
                    writeln!(locked_file, "{}", pid).map_err(LockError::WriteFailed)?;
                    locked_file.sync_all().map_err(LockError::WriteFailed)?;

                    tracing::debug!("[ht-02] Acquired register lock {}", lock_path.display());
                    return Ok(Self {
                        file: locked_file,
                        path: lock_path,
                        pid,
                    });
                }
                Err(_) => {
                    if Instant::now() >= deadline {
                        return Err(LockError::AlreadyLocked {
                            pid: Self::read_existing_pid(&lock_path),
                            path: lock_path,
                        });
                    }

                    // Retry with exponential backoff (capped)
                    drop(file);
                    std::thread::sleep(retry_delay);
                    retry_delay = (retry_delay * 2).min(MAX_RETRY_DELAY);
                }
            }
        }
    }

    /// Get the PID of the process holding the lock
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Get the path to the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read PID from existing lock file (for error messages)
    fn read_existing_pid(path: &Path) -> Option<u32> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }
}

impl Drop for TableLock {
    fn drop(&mut self) {
        // The file stays: unlinking it would let a waiter holding the old
        // inode and a newcomer on a fresh one both believe they hold the lock
        #[allow(clippy::incompatible_msrv)]
        let _ = self.file.unlock();
    }
}
