//! # Infrastructure Adapters
//!
//! Scratch-file handling shared by the composer service.

pub mod raster;
pub mod transient;

pub use raster::write_code_png;
pub use transient::TransientFile;
