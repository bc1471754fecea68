//! # Adapters Layer

pub mod capture;
