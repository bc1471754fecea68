//! # Identifier Index
//!
//! In-memory mirror of every identifier in the register (INVARIANT-1).

use shared_types::Identifier;
use std::collections::HashSet;

/// Set of known identifiers with O(1) membership.
#[derive(Debug, Default, Clone)]
pub struct IdentifierIndex {
    ids: HashSet<Identifier>,
}

impl IdentifierIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from persisted identifiers.
    ///
    /// Returns the index and the identifiers that appeared more than once.
    pub fn from_persisted(ids: impl IntoIterator<Item = Identifier>) -> (Self, Vec<Identifier>) {
        let mut index = Self::new();
        let mut repeated = Vec::new();
        for id in ids {
            if !index.insert(id.clone()) {
                repeated.push(id);
            }
        }
        (index, repeated)
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.ids.contains(id)
    }

    /// Insert an identifier. Returns `false` if it was already present.
    pub fn insert(&mut self, id: Identifier) -> bool {
        self.ids.insert(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
