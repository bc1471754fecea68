//! # Domain Layer
//!
//! Pure domain logic for the issuance register.
//!
//! ## Modules
//!
//! - `schema` - Register column layout
//! - `index` - In-memory identifier index
//! - `config` - Store configuration
//! - `errors` - Domain error types

pub mod config;
pub mod errors;
pub mod index;
pub mod schema;
