//! # Hall Ticket Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── issuance_benchmarks.rs   # Hashing, register and pipeline throughput
//! └── src/
//!     └── integration/             # Full pipeline over the real CSV and PDF adapters
//!         ├── issuance_flow.rs
//!         └── register_recovery.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ht-tests
//! cargo bench -p ht-tests
//! ```

pub mod integration;
