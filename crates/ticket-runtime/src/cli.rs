//! # Command Line
//!
//! ```text
//! ticket-runtime issue --roll R100 --name Asha --dob 2005-01-01 --college "ABC College" [--photo PATH | --capture DEVICE]
//! ticket-runtime list
//! ticket-runtime verify <HASH>
//! ```

use crate::container::RuntimeConfig;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ht_02_record_store::RecordStoreApi;
use ht_03_document_composer::DocumentComposerApi;
use ht_04_issuance::{IssuanceApi, IssuanceOutcome, IssuancePipeline, PhotoSource, StillFileSource};
use shared_types::{CandidateFields, Clock, Identifier, IssuanceRecord, PhotoResource};
use std::io::Write;
use std::path::PathBuf;

/// Issue and inspect exam hall tickets.
#[derive(Parser, Debug)]
#[command(name = "ticket-runtime")]
#[command(about = "Issue and inspect exam hall tickets")]
pub struct Args {
    /// Directory for issued documents
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Issuance register (CSV)
    #[arg(long, global = true)]
    pub record_table: Option<PathBuf>,

    /// Exam schedule (JSON)
    #[arg(long, global = true)]
    pub schedule: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Apply flag overrides on top of `config`.
    pub fn apply(&self, config: &mut RuntimeConfig) {
        if let Some(dir) = &self.storage_dir {
            config.storage.storage_dir = dir.clone();
        }
        if let Some(table) = &self.record_table {
            config.storage.record_table = table.clone();
        }
        if let Some(schedule) = &self.schedule {
            config.schedule.source = Some(schedule.clone());
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Issue a hall ticket
    Issue(IssueArgs),
    /// List issued tickets in register order
    List,
    /// Look up a ticket by its hash
    Verify {
        /// 64-character identifier from the register
        hash: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct IssueArgs {
    /// Roll number
    #[arg(long)]
    pub roll: String,

    /// Candidate name
    #[arg(long)]
    pub name: String,

    /// Date of birth
    #[arg(long)]
    pub dob: String,

    /// College name
    #[arg(long)]
    pub college: String,

    /// Photo file to embed
    #[arg(long, conflicts_with = "capture")]
    pub photo: Option<PathBuf>,

    /// Capture the photo from a still-image device path
    #[arg(long)]
    pub capture: Option<PathBuf>,
}

impl IssueArgs {
    pub fn fields(&self) -> CandidateFields {
        CandidateFields::new(
            self.roll.as_str(),
            self.name.as_str(),
            self.dob.as_str(),
            self.college.as_str(),
        )
    }

    fn photo(&self, config: &RuntimeConfig) -> Result<Option<PhotoResource>> {
        if let Some(device) = &self.capture {
            let source =
                StillFileSource::new(device).with_scratch_dir(&config.storage.scratch_dir);
            let photo = source.capture().context("Photo capture failed")?;
            return Ok(Some(photo));
        }
        Ok(self.photo.clone().map(PhotoResource::Path))
    }
}

/// Run `command` against `pipeline`, writing the report to `out`.
///
/// A duplicate request is reported and succeeds.
pub fn execute<S, D, C, W>(
    command: &Command,
    config: &RuntimeConfig,
    pipeline: &mut IssuancePipeline<S, D, C>,
    out: &mut W,
) -> Result<()>
where
    S: RecordStoreApi,
    D: DocumentComposerApi,
    C: Clock,
    W: Write,
{
    match command {
        Command::Issue(args) => {
            let photo = args.photo(config)?;
            match pipeline.issue(&args.fields(), photo)? {
                IssuanceOutcome::Issued(ticket) => {
                    writeln!(out, "Hall ticket issued")?;
                    writeln!(out, "  Identifier: {}", ticket.identifier)?;
                    writeln!(out, "  Document:   {}", ticket.document_path.display())?;
                    writeln!(out, "  Issued on:  {}", ticket.issued_on)?;
                }
                IssuanceOutcome::Duplicate { identifier } => {
                    writeln!(
                        out,
                        "A hall ticket with these details has already been issued ({})",
                        identifier
                    )?;
                }
            }
        }
        Command::List => {
            let records = pipeline.store().records()?;
            for record in &records {
                writeln!(
                    out,
                    "{}  {}  {}  {}  {}",
                    record.issued_on,
                    record.identifier.short(),
                    record.roll_number,
                    record.name,
                    record.document_path.display()
                )?;
            }
            writeln!(out, "{} tickets issued", records.len())?;
        }
        Command::Verify { hash } => {
            let id = Identifier::parse(hash.trim())
                .with_context(|| format!("Not a ticket hash: {}", hash))?;
            match pipeline.store().find(&id)? {
                Some(record) => write_record(out, &record)?,
                None => bail!("No hall ticket issued for {}", id),
            }
        }
    }
    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &IssuanceRecord) -> Result<()> {
    writeln!(out, "Hall ticket {}", record.identifier)?;
    writeln!(out, "  Roll Number: {}", record.roll_number)?;
    writeln!(out, "  Name:        {}", record.name)?;
    writeln!(out, "  DOB:         {}", record.date_of_birth)?;
    writeln!(out, "  College:     {}", record.college_name)?;
    writeln!(out, "  Document:    {}", record.document_path.display())?;
    writeln!(out, "  Issued on:   {}", record.issued_on)?;
    if !record.document_path.is_file() {
        writeln!(out, "  Warning: document file is missing")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::build_pipeline;
    use chrono::NaiveDate;
    use shared_types::FixedClock;
    use tempfile::TempDir;

    const ASHA_ID: &str = "d35677ea5148a5ca4e55682112585efb2342ae01019a0db27b8af250d097aa98";

    fn config(dir: &TempDir) -> RuntimeConfig {
        let mut config = RuntimeConfig::default();
        config.storage.storage_dir = dir.path().join("hall_tickets");
        config.storage.record_table = dir.path().join("hall_tickets_record.csv");
        config.storage.scratch_dir = dir.path().join("scratch");
        config
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ticket-runtime").chain(args.iter().copied()))
            .unwrap()
    }

    fn run(config: &RuntimeConfig, args: &[&str]) -> Result<String> {
        let args = parse(args);
        let mut pipeline = build_pipeline(config, clock())?;
        let mut out = Vec::new();
        execute(&args.command, config, &mut pipeline, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    const ISSUE_ASHA: &[&str] = &[
        "issue",
        "--roll",
        "R100",
        "--name",
        "Asha",
        "--dob",
        "2005-01-01",
        "--college",
        "ABC College",
    ];

    #[test]
    fn test_parse_issue() {
        let args = parse(ISSUE_ASHA);
        match args.command {
            Command::Issue(issue) => {
                assert_eq!(
                    issue.fields(),
                    CandidateFields::new("R100", "Asha", "2005-01-01", "ABC College")
                );
                assert!(issue.photo.is_none());
            }
            other => panic!("expected issue, got {:?}", other),
        }
    }

    #[test]
    fn test_photo_conflicts_with_capture() {
        let result = Args::try_parse_from([
            "ticket-runtime",
            "issue",
            "--roll",
            "R1",
            "--name",
            "A",
            "--dob",
            "D",
            "--college",
            "C",
            "--photo",
            "a.jpg",
            "--capture",
            "/dev/video0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_override_config() {
        let args = parse(&["--storage-dir", "/srv/tickets", "list"]);
        let mut config = RuntimeConfig::default();
        args.apply(&mut config);
        assert_eq!(config.storage.storage_dir, PathBuf::from("/srv/tickets"));
    }

    #[test]
    fn test_issue_then_duplicate() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let first = run(&config, ISSUE_ASHA).unwrap();
        assert!(first.starts_with("Hall ticket issued"));
        assert!(first.contains(ASHA_ID));
        assert!(first.contains("2026-10-19"));

        let second = run(&config, ISSUE_ASHA).unwrap();
        assert!(second.contains("already been issued"));
        assert!(second.contains(ASHA_ID));
    }

    #[test]
    fn test_list_and_verify() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        run(&config, ISSUE_ASHA).unwrap();

        let listing = run(&config, &["list"]).unwrap();
        assert!(listing.contains("R100"));
        assert!(listing.ends_with("1 tickets issued\n"));

        let verified = run(&config, &["verify", ASHA_ID]).unwrap();
        assert!(verified.contains("Roll Number: R100"));
        assert!(!verified.contains("missing"));
    }

    #[test]
    fn test_verify_unknown_hash_fails() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let unknown = "0".repeat(64);
        assert!(run(&config, &["verify", unknown.as_str()]).is_err());
        assert!(run(&config, &["verify", "not-a-hash"]).is_err());
    }

    #[test]
    fn test_missing_field_is_error() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let result = run(
            &config,
            &["issue", "--roll", "", "--name", "Asha", "--dob", "D", "--college", "C"],
        );
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("roll_number"));
    }

    #[test]
    fn test_capture_from_unavailable_device() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let mut args = ISSUE_ASHA.to_vec();
        args.extend(["--capture", "/dev/no-such-camera"]);

        assert!(run(&config, &args).is_err());
    }
}
