//! # Integration Tests
//!
//! Every test runs in its own temp directory holding the register, the
//! document directory and the scratch directory.

pub mod issuance_flow;
pub mod register_recovery;

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
    use shared_types::{CandidateFields, FixedClock};
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use ticket_runtime::{build_pipeline, RuntimeConfig, TicketPipeline};

    pub const ASHA_ID: &str = "d35677ea5148a5ca4e55682112585efb2342ae01019a0db27b8af250d097aa98";

    pub struct Desk {
        pub dir: TempDir,
        pub config: RuntimeConfig,
    }

    impl Desk {
        pub fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let mut config = RuntimeConfig::default();
            config.storage.storage_dir = dir.path().join("hall_tickets");
            config.storage.record_table = dir.path().join("hall_tickets_record.csv");
            config.storage.scratch_dir = dir.path().join("scratch");
            config.storage.lock_timeout_secs = 0;
            Self { dir, config }
        }

        pub fn open(&self) -> TicketPipeline<FixedClock> {
            build_pipeline(&self.config, FixedClock(issued_on())).unwrap()
        }

        pub fn register(&self) -> &Path {
            &self.config.storage.record_table
        }

        pub fn storage_dir(&self) -> &Path {
            &self.config.storage.storage_dir
        }

        pub fn scratch_dir(&self) -> &Path {
            &self.config.storage.scratch_dir
        }

        pub fn documents(&self) -> Vec<PathBuf> {
            match std::fs::read_dir(self.storage_dir()) {
                Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
                Err(_) => Vec::new(),
            }
        }

        pub fn scratch_is_empty(&self) -> bool {
            match std::fs::read_dir(self.scratch_dir()) {
                Ok(mut entries) => entries.next().is_none(),
                Err(_) => true,
            }
        }

        pub fn register_lines(&self) -> Vec<String> {
            std::fs::read_to_string(self.register())
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    pub fn issued_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    pub fn asha() -> CandidateFields {
        CandidateFields::new("R100", "Asha", "2005-01-01", "ABC College")
    }

    pub fn jpeg_bytes() -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::from_fn(32, 32, |x, y| {
            Rgb([(x * 8) as u8, (y * 8) as u8, 128])
        }))
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Jpeg(85))
        .unwrap();
        bytes
    }
}
