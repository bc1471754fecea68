//! # Runtime Configuration
//!
//! Defaults, overridden by `HT_*` environment variables, overridden in turn
//! by CLI flags.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `HT_STORAGE_DIR` | `storage.storage_dir` |
//! | `HT_RECORD_TABLE` | `storage.record_table` |
//! | `HT_SCRATCH_DIR` | `storage.scratch_dir` |
//! | `HT_SCHEDULE_FILE` | `schedule.source` |

use std::path::{Path, PathBuf};

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Exam schedule configuration.
    pub schedule: ScheduleConfig,
    /// Logging configuration.
    pub log: LogConfig,
}

impl RuntimeConfig {
    /// Validate configuration before anything touches the disk.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - any storage path is empty
    /// - the register has a `.pdf` extension (it would collide with documents)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("storage_dir", &self.storage.storage_dir),
            ("record_table", &self.storage.record_table),
            ("scratch_dir", &self.storage.scratch_dir),
        ];
        for (field, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyPath { field });
            }
        }

        let is_pdf = self
            .storage
            .record_table
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            return Err(ConfigError::RegisterLooksLikeDocument {
                path: self.storage.record_table.clone(),
            });
        }
        Ok(())
    }

    /// Apply `HT_*` overrides from `lookup` (normally the process env).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("HT_STORAGE_DIR") {
            self.storage.storage_dir = PathBuf::from(dir);
        }
        if let Some(table) = lookup("HT_RECORD_TABLE") {
            self.storage.record_table = PathBuf::from(table);
        }
        if let Some(dir) = lookup("HT_SCRATCH_DIR") {
            self.storage.scratch_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup("HT_SCHEDULE_FILE") {
            self.schedule.source = Some(PathBuf::from(file));
        }
    }
}

/// Load configuration from defaults and the process environment.
pub fn load_config() -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    config.apply_env(|key| std::env::var(key).ok());
    config
}

/// Configuration errors.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required path is empty.
    EmptyPath { field: &'static str },
    /// The register path would be mistaken for an issued document.
    RegisterLooksLikeDocument { path: PathBuf },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyPath { field } => {
                write!(f, "Configuration path `{}` must not be empty", field)
            }
            ConfigError::RegisterLooksLikeDocument { path } => write!(
                f,
                "Register {} has a document extension. Use a .csv file.",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory for issued documents.
    pub storage_dir: PathBuf,
    /// Issuance register (CSV).
    pub record_table: PathBuf,
    /// Directory for transient files during composition and capture.
    pub scratch_dir: PathBuf,
    /// How long to wait for another process holding the register lock.
    pub lock_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("hall_tickets"),
            record_table: PathBuf::from("hall_tickets_record.csv"),
            scratch_dir: std::env::temp_dir(),
            lock_timeout_secs: 2,
        }
    }
}

impl StorageConfig {
    pub fn record_table(&self) -> &Path {
        &self.record_table
    }
}

/// Exam schedule configuration.
#[derive(Debug, Clone, Default)]
pub struct ScheduleConfig {
    /// JSON schedule file. The built-in schedule is used when unset.
    pub source: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
    /// Include the event target in each line.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            with_target: true,
        }
    }
}
