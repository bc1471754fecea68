//! # Domain Layer

pub mod config;
pub mod errors;
pub mod outcome;
pub mod state;
