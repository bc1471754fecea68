//! # Ports Layer
//!
//! Defines the port traits for the issuance register.
//!
//! ## Hexagonal Architecture
//!
//! - `inbound.rs` - Driving ports (API exposed to the issuance pipeline)
//! - `outbound.rs` - Driven ports (backing table required by the service)

pub mod inbound;
pub mod outbound;
