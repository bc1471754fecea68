//! # Lock Security
//!
//! ## Security Invariants
//!
//! - **Crash Release**: A crashed holder's flock is released by the kernel, so
//!   a leftover lock file never blocks and is never deleted by a contender
//! - **Deadlock Prevention**: Non-blocking lock acquisition with a deadline

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Upper bound on the retry backoff between lock attempts.
pub const MAX_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Initial retry backoff.
pub const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Lock file guarding a register: `<register file name>.lock` next to it.
pub fn lock_path_for(table_path: &Path) -> PathBuf {
    let mut name = table_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "register".into());
    name.push(".lock");
    table_path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_path_sits_next_to_register() {
        let path = lock_path_for(Path::new("data/hall_tickets_record.csv"));
        assert_eq!(path, PathBuf::from("data/hall_tickets_record.csv.lock"));
    }
}
