//! Name-to-NDC resolution pipelines.
//!
//! Two entry points share the same machinery:
//! - [`DrugResolver`]: drug name → identifiers → related product concepts → NDC records
//! - [`ClassResolver`]: ATC class name → member drugs → related product concepts → NDC records
//!
//! Both fall back to the NDC directory when the terminology walk yields
//! nothing dispensable. Primary-path failures abort the run; only the
//! fallback lookups are defensive.

mod class;
mod drug;
pub mod normalizer;
mod store;

pub use class::*;
pub use drug::*;
pub use store::*;

use thiserror::Error;
use tracing::{info, warn};

use crate::api::{ApiError, ConceptGroup, DirectoryField, DrugApi};
use crate::models::{Concept, NdcRecord};

/// Resolution errors.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("terminology lookup failed: {0}")]
    Api(#[from] ApiError),
}

pub type ResolverResult<T> = Result<T, ResolverError>;

/// Add every concept of every related-concept group to the store, tagged
/// with the group's term type. Returns true when any group had members.
fn collect_related(store: &mut ConceptStore, groups: &[ConceptGroup]) -> bool {
    let mut found = false;
    for group in groups {
        for concept in &group.concept_properties {
            found = true;
            store.add(
                Concept::new(concept.rxcui.clone(), concept.name.clone(), group.tty.clone())
                    .with_synonym(&concept.synonym),
            );
        }
    }
    found
}

/// Fetch NDC properties and term details for each concept, appending one
/// record per property entry. A concept whose property list is absent or
/// whose term details are missing contributes zero records.
fn fetch_ndc_records<A: DrugApi>(
    api: &A,
    concepts: &[&Concept],
    records: &mut Vec<NdcRecord>,
) -> ResolverResult<()> {
    let total = concepts.len();
    for (index, concept) in concepts.iter().enumerate() {
        let properties = api.ndc_properties(&concept.rxcui)?;
        if let Some(details) = api.term_details(&concept.rxcui)? {
            for property in &properties {
                records.push(normalizer::from_primary(concept, &details, property));
            }
        }
        info!(rxcui = %concept.rxcui, "fetched NDC properties ({}/{total})", index + 1);
    }
    Ok(())
}

/// Append fallback records for one directory lookup by generic name.
/// Transport and decode failures are tolerated here and count as zero
/// results for the queried name.
fn fallback_records<A: DrugApi>(api: &A, name: &str, records: &mut Vec<NdcRecord>) {
    let products = match api.directory_products(DirectoryField::GenericName, name) {
        Ok(products) => products,
        Err(err) => {
            warn!("NDC directory lookup for '{name}' failed ({err}); treating as no results");
            return;
        }
    };
    for product in &products {
        for packaging in &product.packaging {
            records.push(normalizer::from_fallback(product, packaging));
        }
    }
}
