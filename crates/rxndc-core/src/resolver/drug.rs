//! Drug-name resolution pipeline.

use tracing::info;

use super::{collect_related, fallback_records, fetch_ndc_records, ConceptStore, ResolverResult};
use crate::api::DrugApi;
use crate::models::{tty, Concept, NdcRecord};

/// Resolves a single generic or brand drug name to NDC records.
pub struct DrugResolver<'a, A: DrugApi> {
    api: &'a A,
}

impl<'a, A: DrugApi> DrugResolver<'a, A> {
    /// Create a resolver over the given API.
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Resolve a drug name.
    ///
    /// Walks name → identifiers → related product concepts → NDC properties.
    /// When no related product concept exists behind any identifier, the NDC
    /// directory is queried directly by the drug name instead; a failure of
    /// that fallback call counts as zero results.
    pub fn resolve(&self, drug_name: &str) -> ResolverResult<Vec<NdcRecord>> {
        let rxcuis = self.api.rxcuis_by_name(drug_name)?;
        if rxcuis.is_empty() {
            return Ok(Vec::new());
        }
        info!("found {} identifier(s) for '{drug_name}'", rxcuis.len());

        let mut store = ConceptStore::new();
        for rxcui in &rxcuis {
            let groups = self.api.related_concepts(rxcui, &tty::PRODUCT_TYPES)?;
            collect_related(&mut store, &groups);
        }

        let mut records = Vec::new();
        if store.is_empty() {
            fallback_records(self.api, drug_name, &mut records);
        } else {
            let concepts: Vec<&Concept> = store.all().iter().collect();
            fetch_ndc_records(self.api, &concepts, &mut records)?;
        }
        Ok(records)
    }
}
