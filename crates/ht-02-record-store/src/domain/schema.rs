//! # Register Schema
//!
//! Column layout of the persisted register. The header row is written once,
//! when the register is created, and checked on every open.

/// Header row, in column order.
pub const TABLE_HEADER: [&str; 7] = [
    "Roll Number",
    "Name",
    "DOB",
    "College Name",
    "PDF Path",
    "Hash",
    "Date of Issue",
];

/// Whether a header row matches [`TABLE_HEADER`] exactly.
pub fn header_matches<'a>(found: impl IntoIterator<Item = &'a str>) -> bool {
    let found: Vec<&str> = found.into_iter().collect();
    found == TABLE_HEADER
}
