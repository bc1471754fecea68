//! # Identity Hashing (ht-01)
//!
//! Derives the primary key of an issuance from the candidate's own fields.
//!
//! ## Algorithm
//!
//! ```text
//! roll_number ─┐
//! name ────────┤
//! dob ─────────┼── join("_") ── UTF-8 ── SHA-256 ── lowercase hex ──→ Identifier
//! college ─────┘
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Determinism | Same four values always yield the same identifier |
//! | 2 | Sensitivity | Changing any field changes the identifier |
//! | 3 | Fixed Width | Identifier is always 64 lowercase hex chars |
//!
//! The identifier is reused unchanged as the register key and as the
//! document file stem, so no separate ID allocation exists.

mod hasher;

pub use hasher::{identify, IdentityHasher, FIELD_DELIMITER};
