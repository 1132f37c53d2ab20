//! Canonical NDC output records.

use serde::{Deserialize, Serialize};

/// One canonical output row, normalized from either data source.
///
/// Records sourced from the fallback directory carry the `"--"` sentinel in
/// `rxcui` and `term_type` because no terminology concept exists for them.
/// Duplicate rows across concepts are possible and retained: the same NDC
/// can be reachable via multiple term types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NdcRecord {
    /// Source concept identifier, `"--"` under fallback sourcing
    pub rxcui: String,
    /// Source concept term type, `"--"` under fallback sourcing
    pub term_type: String,
    /// Full generic name, or "generic (brand)" composite under fallback
    pub name: String,
    /// 11-digit normalized NDC
    pub ndc: String,
    /// Source-native 9-digit variant (fallback: product-level code)
    pub ndc9: String,
    /// Source-native 10-digit variant (fallback: package-level code)
    pub ndc10: String,
    /// Structured product label identifier
    pub spl_id: String,
    /// Packaging description, `"--"` when absent
    pub description: String,
    /// Labeler name
    pub manufacturer: String,
    /// Administration route (lowercased when sourced from fallback)
    pub route: String,
    /// Active ingredient strength text
    pub strength: String,
}
