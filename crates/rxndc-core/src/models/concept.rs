//! Drug terminology concepts and the term type vocabulary.

use serde::{Deserialize, Serialize};

use super::NOT_AVAILABLE;

/// RxNorm term type (TTY) codes used by the resolution pipeline.
pub mod tty {
    /// Ingredient.
    pub const INGREDIENT: &str = "IN";
    /// Minimal concept, as returned in class member listings.
    pub const MIN_CONCEPT: &str = "MIN";
    /// Semantic clinical drug.
    pub const CLINICAL_DRUG: &str = "SCD";
    /// Semantic branded drug.
    pub const BRANDED_DRUG: &str = "SBD";
    /// Generic pack.
    pub const GENERIC_PACK: &str = "GPCK";
    /// Branded pack.
    pub const BRANDED_PACK: &str = "BPCK";

    /// Term types that correspond to dispensable products carrying NDC codes.
    pub const PRODUCT_TYPES: [&str; 4] =
        [CLINICAL_DRUG, BRANDED_DRUG, GENERIC_PACK, BRANDED_PACK];

    /// Term types too coarse to carry NDC codes directly.
    pub const NON_DISPENSABLE: [&str; 2] = [INGREDIENT, MIN_CONCEPT];
}

/// A drug terminology concept discovered during a resolution run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Concept {
    /// RxCUI, unique within one resolution run
    pub rxcui: String,
    /// Display name
    pub name: String,
    /// Term type code (e.g. "SCD", "SBD", "IN")
    pub term_type: String,
    /// Synonym, `"--"` when the source had none
    pub synonym: String,
}

impl Concept {
    /// Create a concept with the synonym sentinel.
    pub fn new(rxcui: String, name: String, term_type: String) -> Self {
        Self {
            rxcui,
            name,
            term_type,
            synonym: NOT_AVAILABLE.to_string(),
        }
    }

    /// Attach a synonym, keeping the sentinel when the source sent a blank.
    pub fn with_synonym(mut self, synonym: &str) -> Self {
        if !synonym.is_empty() {
            self.synonym = synonym.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_concept_uses_synonym_sentinel() {
        let concept = Concept::new("6809".into(), "metformin".into(), tty::INGREDIENT.into());
        assert_eq!(concept.synonym, NOT_AVAILABLE);
    }

    #[test]
    fn test_blank_synonym_keeps_sentinel() {
        let concept =
            Concept::new("860975".into(), "metformin ER".into(), tty::CLINICAL_DRUG.into())
                .with_synonym("");
        assert_eq!(concept.synonym, NOT_AVAILABLE);

        let concept = concept.with_synonym("Glucophage XR");
        assert_eq!(concept.synonym, "Glucophage XR");
    }
}
