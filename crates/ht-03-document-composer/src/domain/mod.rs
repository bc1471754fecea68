//! # Domain Layer
//!
//! Pure page description: what goes where on a hall ticket, independent of
//! any rendering backend.

pub mod code;
pub mod config;
pub mod errors;
pub mod layout;
pub mod schedule;
