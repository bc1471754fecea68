//! # Ports Layer
//!
//! - `inbound`: API this crate offers to the issuance pipeline
//! - `outbound`: rendering and encoding backends it depends on

pub mod inbound;
pub mod outbound;
