//! # Adapters Layer
//!
//! - `pdf`: printpdf page renderer (feature `pdf`)
//! - `qr`: QR code encoder (feature `qr`)
//! - `infra`: code rasterizer and transient scratch files
//! - `mock`: in-process renderers and encoders for tests

pub mod infra;
pub mod mock;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "qr")]
pub mod qr;
