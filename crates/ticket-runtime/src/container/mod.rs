//! # Issuance Container
//!
//! Builds the production pipeline from a `RuntimeConfig`: CSV register,
//! PDF/QR composer and the configured exam schedule.

pub mod config;

pub use config::{load_config, ConfigError, LogConfig, RuntimeConfig, ScheduleConfig, StorageConfig};

use anyhow::{Context, Result};
use ht_02_record_store::{CsvRecordTable, RecordStore, RecordStoreConfig};
use ht_03_document_composer::{
    ComposerConfig, DocumentComposer, ExamSchedule, PdfPageRenderer, QrCodeEncoder,
};
use ht_04_issuance::{IssuancePipeline, PipelineConfig};
use shared_types::Clock;
use std::time::Duration;
use tracing::info;

/// The production pipeline.
pub type TicketPipeline<C> =
    IssuancePipeline<RecordStore<CsvRecordTable>, DocumentComposer<PdfPageRenderer, QrCodeEncoder>, C>;

/// Resolve the exam schedule: the configured file, or the built-in table.
pub fn load_schedule(config: &ScheduleConfig) -> Result<ExamSchedule> {
    match &config.source {
        Some(path) => {
            let schedule = ExamSchedule::load(path)
                .with_context(|| format!("Failed to load exam schedule {}", path.display()))?;
            info!(
                "Loaded {} exams from {}",
                schedule.items().len(),
                path.display()
            );
            Ok(schedule)
        }
        None => Ok(ExamSchedule::default()),
    }
}

/// Open the register and assemble the pipeline.
///
/// Holds the register lock until the returned pipeline is dropped.
pub fn build_pipeline<C: Clock>(config: &RuntimeConfig, clock: C) -> Result<TicketPipeline<C>> {
    config.validate()?;

    let schedule = load_schedule(&config.schedule)?;

    let store_config = RecordStoreConfig::default()
        .with_lock_timeout(Duration::from_secs(config.storage.lock_timeout_secs));
    let store = RecordStore::open_with_config(config.storage.record_table(), store_config)
        .with_context(|| {
            format!(
                "Failed to open register {}",
                config.storage.record_table.display()
            )
        })?;

    let composer = DocumentComposer::pdf(
        schedule,
        ComposerConfig::default().with_scratch_dir(&config.storage.scratch_dir),
    );

    Ok(IssuancePipeline::new(
        store,
        composer,
        clock,
        PipelineConfig::new(&config.storage.storage_dir),
    ))
}
