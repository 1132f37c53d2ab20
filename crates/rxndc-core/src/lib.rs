//! RxNDC Core Library
//!
//! Resolves a drug name or an ATC therapeutic class name into National Drug
//! Code (NDC) records by walking two public services.
//!
//! # Architecture
//!
//! ```text
//! drug name ──► RxNorm identifiers ──┐
//!                                    ├──► related product concepts (SCD/SBD/GPCK/BPCK)
//! ATC class ──► class members     ───┘            │ dedup by RxCUI
//!                                                 ▼
//!                          NDC properties + RxTerms details ──► NdcRecord rows
//!                                                 │
//!                             (nothing dispensable found)
//!                                                 ▼
//!                              openFDA NDC directory fallback
//! ```
//!
//! # Modules
//!
//! - [`api`]: endpoint schema types and the blocking HTTP client
//! - [`models`]: domain types (Concept, NdcRecord)
//! - [`resolver`]: drug/class pipelines, concept store, record normalizer
//! - [`export`]: CSV and table output

pub mod api;
pub mod export;
pub mod models;
pub mod resolver;

// Re-export commonly used types
pub use api::{ApiError, DirectoryField, DrugApi, PharmaClient};
pub use models::{Concept, NdcRecord, NOT_AVAILABLE};
pub use resolver::{ClassResolver, ConceptStore, DrugResolver, ResolverError};
