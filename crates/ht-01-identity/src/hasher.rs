use sha2::{Digest, Sha256};
use shared_types::{CandidateFields, Identifier};

/// Separator placed between field values before hashing.
///
/// Chosen as a character not expected in normal input. Values containing it
/// are still hashed verbatim.
pub const FIELD_DELIMITER: &str = "_";

/// Stateless SHA-256 identity hasher.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasher;

impl IdentityHasher {
    pub fn new() -> Self {
        Self
    }

    /// Compute the identifier for a candidate's fields.
    ///
    /// Equivalent to `sha256(values.join("_"))` over
    /// {roll number, name, date of birth, college name}.
    pub fn identify(&self, fields: &CandidateFields) -> Identifier {
        let mut hasher = Sha256::new();
        for (i, value) in fields.ordered_values().iter().enumerate() {
            if i > 0 {
                hasher.update(FIELD_DELIMITER.as_bytes());
            }
            hasher.update(value.as_bytes());
        }
        let result = hasher.finalize();
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&result);
        Identifier::from_digest(digest)
    }
}

/// One-shot helper for [`IdentityHasher::identify`].
pub fn identify(fields: &CandidateFields) -> Identifier {
    IdentityHasher.identify(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> CandidateFields {
        CandidateFields::new("R100", "Asha", "2005-01-01", "ABC College")
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(
            identify(&asha()).as_str(),
            "d35677ea5148a5ca4e55682112585efb2342ae01019a0db27b8af250d097aa98"
        );
    }

    #[test]
    fn test_matches_joined_preimage() {
        let fields = asha();
        let joined = fields.ordered_values().join(FIELD_DELIMITER);
        let expected = hex::encode(Sha256::digest(joined.as_bytes()));
        assert_eq!(identify(&fields).as_str(), expected);
    }

    #[test]
    fn test_deterministic() {
        let hasher = IdentityHasher::new();
        assert_eq!(hasher.identify(&asha()), hasher.identify(&asha()));
    }

    #[test]
    fn test_each_field_changes_identifier() {
        let base = identify(&asha());
        let variants = [
            CandidateFields::new("R101", "Asha", "2005-01-01", "ABC College"),
            CandidateFields::new("R100", "Asha K", "2005-01-01", "ABC College"),
            CandidateFields::new("R100", "Asha", "2005-01-02", "ABC College"),
            CandidateFields::new("R100", "Asha", "2005-01-01", "XYZ College"),
        ];
        for variant in &variants {
            assert_ne!(identify(variant), base, "{:?}", variant);
        }
        assert_eq!(
            identify(&variants[0]).as_str(),
            "c3772b2d2d161bdd8e31ca391d355bfdb98459ff8727facad97878e61fc38716"
        );
    }

    #[test]
    fn test_field_order_matters() {
        let swapped = CandidateFields::new("Asha", "R100", "2005-01-01", "ABC College");
        assert_ne!(identify(&swapped), identify(&asha()));
    }

    #[test]
    fn test_fixed_width_lowercase_hex() {
        let id = identify(&CandidateFields::new("x", "y", "z", "w"));
        assert_eq!(id.as_str().len(), 64);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
