//! # Register Process Locking
//!
//! Prevents multiple processes from appending to the same register.
//!
//! ## Modules
//!
//! - `flock`: `TableLock` implementation using fs2
//! - `security`: Retry backoff and lock file naming

mod flock;
mod security;

pub use flock::{LockError, TableLock};
