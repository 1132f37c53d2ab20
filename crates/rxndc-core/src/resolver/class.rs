//! ATC class resolution pipeline.

use tracing::info;

use super::{collect_related, fallback_records, fetch_ndc_records, ConceptStore, ResolverResult};
use crate::api::DrugApi;
use crate::models::{tty, Concept, NdcRecord};

/// Resolves an ATC therapeutic class name to NDC records.
pub struct ClassResolver<'a, A: DrugApi> {
    api: &'a A,
}

impl<'a, A: DrugApi> ClassResolver<'a, A> {
    /// Create a resolver over the given API.
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Resolve an ATC class name (levels 1-4).
    ///
    /// Class membership lists often return only ingredient-level concepts,
    /// so unlike the drug pipeline the fallback also fires when concepts
    /// exist but none are NDC-eligible or no related-concept group was ever
    /// found. The fallback sweeps every class's members through the NDC
    /// directory, swallowing each member's lookup failure individually.
    pub fn resolve(&self, class_name: &str) -> ResolverResult<Vec<NdcRecord>> {
        let classes = self.api.classes_by_name(class_name)?;
        if classes.is_empty() {
            return Ok(Vec::new());
        }
        info!("found {} ATC class(es) for '{class_name}'", classes.len());

        let mut store = ConceptStore::new();
        let mut found_concepts = false;
        for class in &classes {
            let members = self.api.class_members(&class.class_id)?;
            for member in &members {
                if store.has(&member.rxcui) {
                    continue;
                }
                store.add(Concept::new(
                    member.rxcui.clone(),
                    member.name.clone(),
                    member.tty.clone(),
                ));
                let groups = self.api.related_concepts(&member.rxcui, &tty::PRODUCT_TYPES)?;
                if collect_related(&mut store, &groups) {
                    found_concepts = true;
                }
            }
        }

        let mut records = Vec::new();
        let eligible = store.eligible_for_lookup(&tty::NON_DISPENSABLE);
        if found_concepts && !eligible.is_empty() {
            fetch_ndc_records(self.api, &eligible, &mut records)?;
        } else {
            for class in &classes {
                let members = self.api.class_members(&class.class_id)?;
                for member in &members {
                    fallback_records(self.api, &member.name, &mut records);
                }
            }
        }
        Ok(records)
    }
}
