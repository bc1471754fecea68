//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Candidate**: `CandidateFields`
//! - **Identity**: `Identifier`
//! - **Register**: `IssuanceRecord`

use crate::errors::IdentifierError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// CLUSTER A: THE CANDIDATE
// =============================================================================

/// Biographical fields submitted for one issuance request.
///
/// Values are opaque strings. The only validation the core applies is that
/// each of the four is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CandidateFields {
    pub roll_number: String,
    pub name: String,
    pub date_of_birth: String,
    pub college_name: String,
}

impl CandidateFields {
    /// Field names in identity order, as reported by `missing_fields`.
    pub const FIELD_NAMES: [&'static str; 4] =
        ["roll_number", "name", "date_of_birth", "college_name"];

    pub fn new(
        roll_number: impl Into<String>,
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
        college_name: impl Into<String>,
    ) -> Self {
        Self {
            roll_number: roll_number.into(),
            name: name.into(),
            date_of_birth: date_of_birth.into(),
            college_name: college_name.into(),
        }
    }

    /// The four values in the fixed identity order
    /// {roll number, name, date of birth, college name}.
    pub fn ordered_values(&self) -> [&str; 4] {
        [
            &self.roll_number,
            &self.name,
            &self.date_of_birth,
            &self.college_name,
        ]
    }

    /// Names of the fields that are empty, in identity order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Self::FIELD_NAMES
            .iter()
            .zip(self.ordered_values())
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.ordered_values().iter().all(|value| !value.is_empty())
    }
}

// =============================================================================
// CLUSTER B: IDENTITY
// =============================================================================

/// Content-derived primary key of an issuance: 64 lowercase hex characters
/// (a 256-bit digest).
///
/// Doubles as the document file stem and the `Hash` column of the register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Length of the hex rendering.
    pub const HEX_LEN: usize = 64;

    /// Parse an identifier, rejecting anything but 64 lowercase hex chars.
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        let actual = value.chars().count();
        if actual != Self::HEX_LEN {
            return Err(IdentifierError::InvalidLength {
                expected: Self::HEX_LEN,
                actual,
            });
        }
        if let Some((offset, character)) = value
            .char_indices()
            .find(|(_, c)| !matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(IdentifierError::InvalidCharacter { character, offset });
        }
        Ok(Self(value.to_string()))
    }

    /// Wrap a 32-byte digest.
    pub fn from_digest(digest: [u8; 32]) -> Self {
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 characters, for log lines.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

// =============================================================================
// CLUSTER C: THE REGISTER
// =============================================================================

/// One persisted row documenting a completed issuance.
///
/// Field order and serde names match the register header:
/// `Roll Number,Name,DOB,College Name,PDF Path,Hash,Date of Issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceRecord {
    #[serde(rename = "Roll Number")]
    pub roll_number: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "DOB")]
    pub date_of_birth: String,
    #[serde(rename = "College Name")]
    pub college_name: String,
    #[serde(rename = "PDF Path")]
    pub document_path: PathBuf,
    #[serde(rename = "Hash")]
    pub identifier: Identifier,
    /// Serialized as `YYYY-MM-DD`.
    #[serde(rename = "Date of Issue")]
    pub issued_on: NaiveDate,
}

impl IssuanceRecord {
    pub fn new(
        fields: &CandidateFields,
        document_path: impl Into<PathBuf>,
        identifier: Identifier,
        issued_on: NaiveDate,
    ) -> Self {
        Self {
            roll_number: fields.roll_number.clone(),
            name: fields.name.clone(),
            date_of_birth: fields.date_of_birth.clone(),
            college_name: fields.college_name.clone(),
            document_path: document_path.into(),
            identifier,
            issued_on,
        }
    }

    /// The candidate fields this record was issued for.
    pub fn fields(&self) -> CandidateFields {
        CandidateFields::new(
            self.roll_number.clone(),
            self.name.clone(),
            self.date_of_birth.clone(),
            self.college_name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_reported_in_order() {
        let fields = CandidateFields::new("", "Asha", "", "ABC College");
        assert_eq!(fields.missing_fields(), vec!["roll_number", "date_of_birth"]);
        assert!(!fields.is_complete());
    }

    #[test]
    fn test_complete_fields() {
        let fields = CandidateFields::new("R100", "Asha", "2005-01-01", "ABC College");
        assert!(fields.missing_fields().is_empty());
        assert!(fields.is_complete());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let fields = CandidateFields::new(" ", "Asha", "2005-01-01", "ABC College");
        assert!(fields.is_complete());
    }

    #[test]
    fn test_identifier_from_digest() {
        let id = Identifier::from_digest([0xAB; 32]);
        assert_eq!(id.as_str().len(), Identifier::HEX_LEN);
        assert!(id.as_str().starts_with("abab"));
        assert_eq!(id.short(), "abababababab");
    }

    #[test]
    fn test_identifier_parse_rejects_uppercase() {
        let upper = "A".repeat(64);
        assert!(matches!(
            Identifier::parse(&upper),
            Err(IdentifierError::InvalidCharacter { character: 'A', offset: 0 })
        ));
    }

    #[test]
    fn test_identifier_parse_rejects_length() {
        assert_eq!(
            Identifier::parse("abc"),
            Err(IdentifierError::InvalidLength {
                expected: 64,
                actual: 3
            })
        );
    }

    #[test]
    fn test_identifier_serde_validates() {
        let json = format!("\"{}\"", "0".repeat(64));
        let id: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(id.as_str(), "0".repeat(64));

        assert!(serde_json::from_str::<Identifier>("\"not-hex\"").is_err());
    }

    #[test]
    fn test_record_keeps_fields() {
        let fields = CandidateFields::new("R100", "Asha", "2005-01-01", "ABC College");
        let record = IssuanceRecord::new(
            &fields,
            "hall_tickets/x.pdf",
            Identifier::from_digest([1; 32]),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        );
        assert_eq!(record.fields(), fields);
    }
}
