//! # Document Composer (ht-03)
//!
//! Renders one printable hall ticket per issuance: the candidate's fields, an
//! optional photo, a scannable code carrying the roll number, and the exam
//! schedule dated from the issuance day.
//!
//! ## Architecture
//!
//! ```text
//!  roll number ──→ CodeEncoder ──→ CodeMatrix ──→ raster ──→ transient PNG ─┐
//!  photo bytes ──→ staged transient file ───────────────────────────────────┤
//!  fields + schedule(issued_on) ──→ PageLayout ←────────────────────────────┘
//!                                      │
//!                                      ↓
//!                               PageRenderer ──→ <storage>/<identifier>.pdf
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Fixed Layout | Text, photo, code and schedule sit at fixed positions |
//! | 2 | Code Payload | The scannable code encodes the roll number only |
//! | 3 | No Transients | Every transient file is released before `compose` returns |
//! | 4 | Whole Artifact | The destination holds a complete document or is untouched |
//! | 5 | Optional Photo | A missing photo is omitted, never an error |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Layout, schedule, code matrix, errors
//! - `ports/` - Inbound composer API, outbound renderer and encoder SPI
//! - `adapters/` - PDF renderer, QR encoder, code rasterizer, test doubles
//! - `service/` - `DocumentComposer` implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use ht_03_document_composer::{DocumentComposer, DocumentComposerApi};
//!
//! let composer = DocumentComposer::pdf(ExamSchedule::default(), ComposerConfig::default());
//! composer.compose(&fields, photo.as_ref(), &destination, issued_on)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::mock::{FailingEncoder, FailingRenderer, RecordingRenderer, StaticEncoder};
pub use domain::code::CodeMatrix;
pub use domain::config::{ComposerConfig, PageSize};
pub use domain::errors::{ComposeError, EncodingError, RenderError, ScheduleError};
pub use domain::layout::{ImageRole, LayoutElement, PageLayout};
pub use domain::schedule::{ExamSchedule, ScheduleItem};
pub use ports::inbound::DocumentComposerApi;
pub use ports::outbound::{CodeEncoder, PageRenderer};
pub use service::DocumentComposer;

#[cfg(feature = "pdf")]
pub use adapters::pdf::PdfPageRenderer;
#[cfg(feature = "qr")]
pub use adapters::qr::QrCodeEncoder;
