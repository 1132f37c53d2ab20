//! Maps raw service responses into the canonical NDC record shape.
//!
//! Handles:
//! - Primary mapping (terminology concept + term details + NDC property)
//! - Fallback mapping (directory product + packaging entry)
//! - NDC-11 packing from hyphen-delimited package codes

use crate::api::{DirectoryPackaging, DirectoryProduct, NdcProperty, TermDetails};
use crate::models::{Concept, NdcRecord, NOT_AVAILABLE};

/// Property name carrying the labeler within an NDC property entry.
const LABELER_PROPERTY: &str = "LABELER";

/// Build a record from the primary (terminology) source.
pub fn from_primary(concept: &Concept, details: &TermDetails, property: &NdcProperty) -> NdcRecord {
    let packaging = property.packaging();
    let description = if packaging.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        packaging.join("; ")
    };

    NdcRecord {
        rxcui: concept.rxcui.clone(),
        term_type: concept.term_type.clone(),
        name: details.full_generic_name.clone(),
        ndc: property.ndc_item.clone(),
        ndc9: property.ndc9.clone(),
        ndc10: property.ndc10.clone(),
        spl_id: property.spl_set_id.clone(),
        description,
        manufacturer: property
            .property(LABELER_PROPERTY)
            .unwrap_or_default()
            .to_string(),
        route: details.route.clone(),
        strength: details.strength.clone(),
    }
}

/// Build a record from the fallback (directory) source. No terminology
/// concept exists for these, so identifier fields carry the sentinel.
pub fn from_fallback(product: &DirectoryProduct, packaging: &DirectoryPackaging) -> NdcRecord {
    let strength = product
        .active_ingredients
        .iter()
        .map(|ai| format!("{} {}", ai.name, ai.strength))
        .collect::<Vec<_>>()
        .join("; ");

    NdcRecord {
        rxcui: NOT_AVAILABLE.to_string(),
        term_type: NOT_AVAILABLE.to_string(),
        name: format!("{} ({})", product.generic_name, product.brand_name),
        ndc: pack_ndc11(&packaging.package_ndc),
        ndc9: product.product_ndc.clone(),
        ndc10: packaging.package_ndc.clone(),
        spl_id: product.spl_id.clone(),
        description: if packaging.description.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            packaging.description.clone()
        },
        manufacturer: product.labeler_name.clone(),
        route: product.route.join(", ").to_lowercase(),
        strength,
    }
}

/// Normalize a hyphen-delimited labeler-product-package code to 11 digits.
///
/// The three segments are zero-padded to widths 5, 4 and 2 and concatenated.
/// A code without exactly two hyphens is returned with any hyphens stripped;
/// hyphen-free input therefore passes through unchanged.
pub fn pack_ndc11(package_code: &str) -> String {
    let segments: Vec<&str> = package_code.split('-').collect();
    if segments.len() == 3 {
        format!("{:0>5}{:0>4}{:0>2}", segments[0], segments[1], segments[2])
    } else {
        package_code.replace('-', "")
    }
}
