//! Remote API boundary.
//!
//! Endpoint schema types for the two services, the [`DrugApi`] seam the
//! resolvers are written against, and the blocking HTTP implementation.

mod client;
pub mod openfda;
pub mod rxnorm;

pub use client::PharmaClient;
pub use openfda::{ActiveIngredient, DirectoryPackaging, DirectoryProduct};
pub use rxnorm::{
    AtcClass, ClassMember, ConceptGroup, GroupConcept, NdcProperty, TermDetails,
};

use thiserror::Error;

/// Remote call errors.
///
/// This is the full set of failure kinds a fallback lookup is allowed to
/// tolerate; anything else in the pipeline is a programming error and panics
/// rather than hiding behind this enum.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Which NDC directory field a fallback lookup matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryField {
    /// Match on the product's generic name.
    GenericName,
    /// Match on the product's pharmacologic class.
    PharmClass,
}

impl DirectoryField {
    /// The openFDA search field name.
    pub fn query_field(&self) -> &'static str {
        match self {
            DirectoryField::GenericName => "generic_name",
            DirectoryField::PharmClass => "pharm_class",
        }
    }
}

/// Seam between the resolvers and the two remote services.
///
/// Every call blocks until a response or failure is received. Responses are
/// already flattened: an absent container in the source JSON surfaces as an
/// empty collection (or `None` where the resolvers must distinguish absence).
pub trait DrugApi {
    /// RxCUIs matching a drug name (exact-ish search).
    fn rxcuis_by_name(&self, name: &str) -> ApiResult<Vec<String>>;

    /// ATC classes (levels 1-4) matching a class name.
    fn classes_by_name(&self, class_name: &str) -> ApiResult<Vec<AtcClass>>;

    /// Member drugs of an ATC class.
    fn class_members(&self, class_id: &str) -> ApiResult<Vec<ClassMember>>;

    /// Related concepts of a RxCUI, restricted to the given term types.
    fn related_concepts(&self, rxcui: &str, ttys: &[&str]) -> ApiResult<Vec<ConceptGroup>>;

    /// NDC property entries for a concept, empty when the list is absent.
    fn ndc_properties(&self, rxcui: &str) -> ApiResult<Vec<NdcProperty>>;

    /// RxTerms detail for a concept, `None` when the source has none.
    fn term_details(&self, rxcui: &str) -> ApiResult<Option<TermDetails>>;

    /// NDC directory products matching a field/value pair.
    fn directory_products(
        &self,
        field: DirectoryField,
        value: &str,
    ) -> ApiResult<Vec<DirectoryProduct>>;
}
