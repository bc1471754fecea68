//! # Document Composer Service
//!
//! Assembles a hall ticket from candidate fields:
//! 1. Check the destination directory
//! 2. Encode the roll number and rasterize it to a transient PNG
//! 3. Stage the photo (bytes go to a transient file, paths are used in place)
//! 4. Date the exam schedule from the issuance day
//! 5. Hand the layout to the page renderer
//!
//! Transient files are guards owned by `compose`, so they are released on
//! every return path (INVARIANT-3).


use crate::adapters::infra::{write_code_png, TransientFile};
use crate::domain::config::ComposerConfig;
use crate::domain::errors::{ComposeError, RenderError};
use crate::domain::layout::PageLayout;
use crate::domain::schedule::ExamSchedule;
use crate::ports::inbound::DocumentComposerApi;
use crate::ports::outbound::{CodeEncoder, PageRenderer};
use chrono::NaiveDate;
use shared_types::{CandidateFields, PhotoResource};
use std::path::Path;

const CODE_PREFIX: &str = "ht-code-";
const PHOTO_PREFIX: &str = "ht-photo-";

/// Composes hall tickets through a pluggable renderer and encoder.
pub struct DocumentComposer<R: PageRenderer, E: CodeEncoder> {
    renderer: R,
    encoder: E,
    schedule: ExamSchedule,
    config: ComposerConfig,
}

#[cfg(all(feature = "pdf", feature = "qr"))]
impl DocumentComposer<crate::adapters::pdf::PdfPageRenderer, crate::adapters::qr::QrCodeEncoder> {
    /// Composer writing PDF tickets with QR codes.
    pub fn pdf(schedule: ExamSchedule, config: ComposerConfig) -> Self {
        Self::new(
            crate::adapters::pdf::PdfPageRenderer::default(),
            crate::adapters::qr::QrCodeEncoder,
            schedule,
            config,
        )
    }
}

impl<R: PageRenderer, E: CodeEncoder> DocumentComposer<R, E> {
    pub fn new(renderer: R, encoder: E, schedule: ExamSchedule, config: ComposerConfig) -> Self {
        Self {
            renderer,
            encoder,
            schedule,
            config,
        }
    }

    pub fn schedule(&self) -> &ExamSchedule {
        &self.schedule
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    fn check_destination(destination: &Path) -> Result<(), RenderError> {
        let parent = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        if parent.is_dir() {
            Ok(())
        } else {
            Err(RenderError::DestinationUnavailable {
                path: parent.to_path_buf(),
            })
        }
    }

    fn ensure_scratch(&self) -> Result<&Path, RenderError> {
        let dir = self.config.scratch_dir.as_path();
        std::fs::create_dir_all(dir).map_err(|e| RenderError::ScratchUnavailable {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(dir)
    }

    /// Stage `photo` for the renderer.
    ///
    /// Returns the staged guard (for bytes) and the path to draw, if any.
    fn stage_photo<'p>(
        &self,
        photo: Option<&'p PhotoResource>,
        scratch: &Path,
    ) -> Result<(Option<TransientFile>, Option<&'p Path>), RenderError> {
        let Some(photo) = photo else {
            return Ok((None, None));
        };

        match photo {
            PhotoResource::Bytes(bytes) if bytes.is_empty() => {
                tracing::warn!("[ht-03] Photo is empty, ticket issued without photo");
                Ok((None, None))
            }
            PhotoResource::Bytes(bytes) => {
                let format =
                    image::guess_format(bytes).map_err(|e| RenderError::ImageDecode {
                        source_name: "photo bytes".to_string(),
                        reason: e.to_string(),
                    })?;
                let suffix = format
                    .extensions_str()
                    .first()
                    .map(|ext| format!(".{}", ext))
                    .unwrap_or_default();
                let staged = TransientFile::with_contents(scratch, PHOTO_PREFIX, &suffix, bytes)?;
                Ok((Some(staged), None))
            }
            PhotoResource::Path(_) | PhotoResource::Captured(_) => match photo.path() {
                Some(path) if path.is_file() => Ok((None, Some(path))),
                other => {
                    tracing::warn!(
                        "[ht-03] Photo {} not found, ticket issued without photo",
                        other.map(|p| p.display().to_string()).unwrap_or_default()
                    );
                    Ok((None, None))
                }
            },
        }
    }
}

impl<R: PageRenderer, E: CodeEncoder> DocumentComposerApi for DocumentComposer<R, E> {
    fn extension(&self) -> &str {
        self.renderer.extension()
    }

    fn compose(
        &self,
        fields: &CandidateFields,
        photo: Option<&PhotoResource>,
        destination: &Path,
        issued_on: NaiveDate,
    ) -> Result<(), ComposeError> {
        Self::check_destination(destination)?;

        // INVARIANT-2: roll number only
        let matrix = self.encoder.encode(&fields.roll_number)?;

        let scratch = self.ensure_scratch()?;
        let code_file = TransientFile::create(scratch, CODE_PREFIX, ".png")?;
        write_code_png(
            &matrix,
            self.config.module_px,
            self.config.quiet_zone,
            code_file.path(),
        )?;

        let (staged_photo, photo_path) = self.stage_photo(photo, scratch)?;
        let photo_path = staged_photo
            .as_ref()
            .map(TransientFile::path)
            .or(photo_path);

        let schedule_lines = self
            .schedule
            .dated_lines(issued_on)
            .map_err(|e| RenderError::Layout(e.to_string()))?;

        let layout = PageLayout::hall_ticket(
            self.config.page,
            self.config.font_size,
            fields,
            photo_path,
            code_file.path(),
            &schedule_lines,
        );
        self.renderer.render(&layout, destination)?;

        tracing::info!(
            "[ht-03] Composed ticket for roll number {} at {}",
            fields.roll_number,
            destination.display()
        );
        Ok(())
    }
}
