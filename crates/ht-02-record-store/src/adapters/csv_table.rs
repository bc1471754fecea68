use crate::domain::errors::TableError;
use crate::domain::schema::{header_matches, TABLE_HEADER};
use crate::ports::outbound::RecordTable;
use shared_types::IssuanceRecord;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// File operations needed to append a row and undo it.
trait RowSink: Write + Seek {
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
    fn sync(&mut self) -> io::Result<()>;
}

impl RowSink for File {
    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.sync_data()
    }
}

/// Write `bytes` at `start`. On any failure the file is cut back to `start`,
/// so a row is either fully present or absent.
fn append_at<F: RowSink>(file: &mut F, start: u64, bytes: &[u8], sync: bool) -> io::Result<()> {
    let written = file
        .seek(SeekFrom::Start(start))
        .and_then(|_| file.write_all(bytes))
        .and_then(|_| file.flush())
        .and_then(|_| if sync { file.sync() } else { Ok(()) });

    if let Err(err) = written {
        if let Err(undo) = file.truncate_to(start).and_then(|_| file.sync()) {
            tracing::warn!("[ht-02] Failed to roll back partial row: {}", undo);
        }
        return Err(err);
    }
    Ok(())
}

/// CSV file register.
///
/// One header row followed by one row per issuance. Rows are appended with a
/// single write of a fully encoded line, so a crash can at worst leave a
/// torn final line, which is discarded on the next open.
pub struct CsvRecordTable {
    path: PathBuf,
    sync_writes: bool,
}

impl CsvRecordTable {
    /// Create a table handle for the given path. Nothing is touched on disk
    /// until `load_or_create`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sync_writes: true,
        }
    }

    /// Enable or disable `fsync` after each appended row.
    pub fn with_sync_writes(mut self, sync: bool) -> Self {
        self.sync_writes = sync;
        self
    }

    fn row_writer() -> csv::Writer<Vec<u8>> {
        csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new())
    }

    fn encode_header() -> Result<Vec<u8>, TableError> {
        let mut writer = Self::row_writer();
        writer
            .write_record(TABLE_HEADER)
            .map_err(|e| TableError::Encoding {
                message: e.to_string(),
            })?;
        writer.into_inner().map_err(|e| TableError::Encoding {
            message: e.to_string(),
        })
    }

    fn encode_row(record: &IssuanceRecord) -> Result<Vec<u8>, TableError> {
        let mut writer = Self::row_writer();
        writer.serialize(record).map_err(|e| TableError::Encoding {
            message: e.to_string(),
        })?;
        writer.into_inner().map_err(|e| TableError::Encoding {
            message: e.to_string(),
        })
    }

    fn parse_rows(bytes: &[u8]) -> Result<Vec<IssuanceRecord>, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| TableError::MalformedRow {
                line: 1,
                message: e.to_string(),
            })?
            .clone();
        if !header_matches(headers.iter()) {
            return Err(TableError::HeaderMismatch {
                found: headers.iter().map(String::from).collect(),
            });
        }

        let mut rows = Vec::new();
        for result in reader.deserialize::<IssuanceRecord>() {
            let record = result.map_err(|e| TableError::MalformedRow {
                line: e.position().map(|p| p.line()).unwrap_or(0),
                message: e.to_string(),
            })?;
            rows.push(record);
        }
        Ok(rows)
    }

    fn create_with_header(&self) -> Result<(), TableError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = Self::encode_header()?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        tracing::info!("[ht-02] Created register at {}", self.path.display());
        Ok(())
    }

    /// Fix up a register whose last line has no terminator.
    ///
    /// Rows are written together with their newline, so an unterminated final
    /// line is a torn append even when it happens to parse. It is cut off,
    /// provided everything before it parses. A bare header just gets its
    /// newline back.
    fn repair_tail(&self, bytes: &mut Vec<u8>) -> Result<(), TableError> {
        if bytes.ends_with(b"\n") {
            return Ok(());
        }

        let keep = bytes.iter().rposition(|b| *b == b'\n').map_or(0, |i| i + 1);
        if keep == 0 {
            if Self::parse_rows(bytes).is_ok_and(|rows| rows.is_empty()) {
                let mut file = OpenOptions::new().append(true).open(&self.path)?;
                file.write_all(b"\n")?;
                bytes.push(b'\n');
            }
            return Ok(());
        }
        if Self::parse_rows(&bytes[..keep]).is_err() {
            // Not a torn tail; let the parser report it.
            return Ok(());
        }

        tracing::warn!(
            "[ht-02] Discarding torn trailing row ({} bytes) in {}",
            bytes.len() - keep,
            self.path.display()
        );
        let file = OpenOptions::new().write(true).open(&self.path)?;
        file.set_len(keep as u64)?;
        file.sync_all()?;
        bytes.truncate(keep);
        Ok(())
    }

    /// Offset just past the last complete line, where the next row goes.
    ///
    /// Normally the end of the file. Any unterminated fragment after the last
    /// newline is cut off first so the new row starts on its own line.
    fn row_boundary(&self, file: &mut File) -> Result<u64, TableError> {
        let len = file.metadata()?.len();
        if len == 0 {
            return Ok(0);
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::Start(len - 1))?;
        file.read_exact(&mut last)?;
        if last[0] == b'\n' {
            return Ok(len);
        }

        let mut bytes = Vec::with_capacity(len as usize);
        file.seek(SeekFrom::Start(0))?;
        file.read_to_end(&mut bytes)?;
        let keep = match bytes.iter().rposition(|b| *b == b'\n') {
            Some(i) => i + 1,
            None => {
                return Err(TableError::MalformedRow {
                    line: 1,
                    message: "register has no complete header line".to_string(),
                })
            }
        };

        tracing::warn!(
            "[ht-02] Discarding unterminated fragment ({} bytes) in {}",
            bytes.len() - keep,
            self.path.display()
        );
        file.set_len(keep as u64)?;
        Ok(keep as u64)
    }
}

impl RecordTable for CsvRecordTable {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load_or_create(&mut self) -> Result<Vec<IssuanceRecord>, TableError> {
        let exists = match fs::metadata(&self.path) {
            Ok(metadata) => metadata.len() > 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };

        if !exists {
            tracing::info!("[ht-02] No register at {}", self.path.display());
            self.create_with_header()?;
            return Ok(Vec::new());
        }

        let mut bytes = fs::read(&self.path)?;
        self.repair_tail(&mut bytes)?;
        let rows = Self::parse_rows(&bytes)?;

        tracing::info!(
            "[ht-02] Loaded {} rows from {}",
            rows.len(),
            self.path.display()
        );
        Ok(rows)
    }

    fn append_row(&mut self, record: &IssuanceRecord) -> Result<(), TableError> {
        let bytes = Self::encode_row(record)?;

        let mut file = OpenOptions::new().read(true).write(true).open(&self.path)?;
        let start = self.row_boundary(&mut file)?;
        append_at(&mut file, start, &bytes, self.sync_writes)?;
        Ok(())
    }

    fn read_rows(&self) -> Result<Vec<IssuanceRecord>, TableError> {
        let bytes = fs::read(&self.path)?;
        Self::parse_rows(&bytes)
    }
}
