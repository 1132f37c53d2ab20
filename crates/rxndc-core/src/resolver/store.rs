//! In-memory concept store.

use std::collections::HashSet;

use crate::models::Concept;

/// Insertion-ordered, identifier-deduplicated collection of concepts.
///
/// Write-once per resolution run: first-seen wins, there is no removal.
#[derive(Debug, Default)]
pub struct ConceptStore {
    seen: HashSet<String>,
    concepts: Vec<Concept>,
}

impl ConceptStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a concept with this identifier is already stored.
    pub fn has(&self, rxcui: &str) -> bool {
        self.seen.contains(rxcui)
    }

    /// Insert a concept. Returns false (and keeps the stored one) when the
    /// identifier is already present.
    pub fn add(&mut self, concept: Concept) -> bool {
        if !self.seen.insert(concept.rxcui.clone()) {
            return false;
        }
        self.concepts.push(concept);
        true
    }

    /// All stored concepts in insertion order.
    pub fn all(&self) -> &[Concept] {
        &self.concepts
    }

    /// Stored concepts whose term type is not in the excluded set.
    pub fn eligible_for_lookup(&self, excluded_term_types: &[&str]) -> Vec<&Concept> {
        self.concepts
            .iter()
            .filter(|c| !excluded_term_types.contains(&c.term_type.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}
