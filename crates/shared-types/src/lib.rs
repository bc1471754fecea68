//! # Shared Types Crate
//!
//! This crate contains the domain entities passed between the issuance
//! subsystems (ht-01 to ht-04) and the runtime.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Content Identity**: An `Identifier` is only ever produced from candidate
//!   fields (ht-01) or parsed from a persisted row; it is never allocated.
//! - **Owned Resources**: A `PhotoResource` that owns a transient file releases
//!   it when dropped, whichever path the request takes.

pub mod clock;
pub mod entities;
pub mod errors;
pub mod photo;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entities::*;
pub use errors::*;
pub use photo::PhotoResource;
