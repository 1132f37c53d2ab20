//! Response schema for the openFDA NDC directory.
//!
//! Field names already match the source JSON, so only defaults are needed:
//! the directory omits fields per product rather than sending nulls.

use serde::Deserialize;

/// Envelope for a directory search.
#[derive(Debug, Deserialize)]
pub struct DirectoryResponse {
    #[serde(default)]
    pub results: Vec<DirectoryProduct>,
}

/// One listed drug product.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct DirectoryProduct {
    /// Labeler-product code segment pair (e.g. "0378-0018")
    #[serde(default)]
    pub product_ndc: String,
    #[serde(default)]
    pub generic_name: String,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub labeler_name: String,
    #[serde(default)]
    pub spl_id: String,
    /// Administration routes, usually a single entry
    #[serde(default)]
    pub route: Vec<String>,
    #[serde(default)]
    pub active_ingredients: Vec<ActiveIngredient>,
    #[serde(default)]
    pub packaging: Vec<DirectoryPackaging>,
}

/// Active ingredient with its strength text.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ActiveIngredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub strength: String,
}

/// One packaging entry of a listed product.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct DirectoryPackaging {
    /// Full labeler-product-package code (e.g. "0378-0018-01")
    #[serde(default)]
    pub package_ndc: String,
    #[serde(default)]
    pub description: String,
}
