//! Response schema for the RxNav terminology services (RxNorm, RxClass,
//! RxTerms).
//!
//! RxNav omits whole containers instead of sending empty lists, so each
//! envelope keeps its nested containers behind `Option` and exposes an
//! accessor that flattens absence into "no results". Only the fields the
//! pipeline reads are modeled.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// GET /rxcui.json?name=...&search=2
// ---------------------------------------------------------------------------

/// Envelope for the identifier-by-name lookup.
#[derive(Debug, Deserialize)]
pub struct RxcuiLookupResponse {
    #[serde(rename = "idGroup")]
    pub id_group: Option<IdGroup>,
}

#[derive(Debug, Deserialize)]
pub struct IdGroup {
    #[serde(rename = "rxnormId")]
    pub rxnorm_id: Option<Vec<String>>,
}

impl RxcuiLookupResponse {
    /// All matched identifiers, empty when the group is absent.
    pub fn into_ids(self) -> Vec<String> {
        self.id_group.and_then(|g| g.rxnorm_id).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// GET /rxclass/class/byName.json?className=...&classTypes=ATC1-4
// ---------------------------------------------------------------------------

/// Envelope for the class-by-name lookup.
#[derive(Debug, Deserialize)]
pub struct ClassLookupResponse {
    #[serde(rename = "rxclassMinConceptList")]
    pub concept_list: Option<ClassConceptList>,
}

#[derive(Debug, Deserialize)]
pub struct ClassConceptList {
    #[serde(rename = "rxclassMinConcept", default)]
    pub concepts: Vec<AtcClass>,
}

/// One ATC class returned by the terminology source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AtcClass {
    #[serde(rename = "classId")]
    pub class_id: String,
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "classType", default)]
    pub class_type: String,
}

impl ClassLookupResponse {
    /// All matched classes, empty when the list is absent.
    pub fn into_classes(self) -> Vec<AtcClass> {
        self.concept_list.map(|l| l.concepts).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// GET /rxclass/classMembers.json?classId=...&relaSource=ATC
// ---------------------------------------------------------------------------

/// Envelope for the class-membership lookup.
#[derive(Debug, Deserialize)]
pub struct ClassMembersResponse {
    #[serde(rename = "drugMemberGroup")]
    pub member_group: Option<DrugMemberGroup>,
}

#[derive(Debug, Deserialize)]
pub struct DrugMemberGroup {
    #[serde(rename = "drugMember", default)]
    pub drug_member: Vec<DrugMember>,
}

#[derive(Debug, Deserialize)]
pub struct DrugMember {
    #[serde(rename = "minConcept")]
    pub min_concept: Option<ClassMember>,
}

/// One member drug of an ATC class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassMember {
    pub rxcui: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tty: String,
}

impl ClassMembersResponse {
    /// All member concepts, empty when the group is absent.
    pub fn into_members(self) -> Vec<ClassMember> {
        self.member_group
            .map(|g| g.drug_member)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| m.min_concept)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// GET /rxcui/{rxcui}/related.json?tty=...
// ---------------------------------------------------------------------------

/// Envelope for the related-concept lookup.
#[derive(Debug, Deserialize)]
pub struct RelatedResponse {
    #[serde(rename = "relatedGroup")]
    pub related_group: Option<RelatedGroup>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedGroup {
    #[serde(rename = "conceptGroup", default)]
    pub concept_group: Vec<ConceptGroup>,
}

/// Concepts of one term type related to a queried RxCUI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConceptGroup {
    #[serde(default)]
    pub tty: String,
    #[serde(rename = "conceptProperties", default)]
    pub concept_properties: Vec<GroupConcept>,
}

/// One concept within a related-concept group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupConcept {
    pub rxcui: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub synonym: String,
}

impl RelatedResponse {
    /// All concept groups, empty when the outer group is absent.
    pub fn into_groups(self) -> Vec<ConceptGroup> {
        self.related_group.map(|g| g.concept_group).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// GET /rxcui/{rxcui}/ndcproperties.json
// ---------------------------------------------------------------------------

/// Envelope for the NDC-properties lookup.
#[derive(Debug, Deserialize)]
pub struct NdcPropertiesResponse {
    #[serde(rename = "ndcPropertyList")]
    pub property_list: Option<NdcPropertyList>,
}

#[derive(Debug, Deserialize)]
pub struct NdcPropertyList {
    #[serde(rename = "ndcProperty", default)]
    pub ndc_property: Vec<NdcProperty>,
}

/// One NDC property entry for a concept.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct NdcProperty {
    /// 11-digit normalized NDC
    #[serde(rename = "ndcItem", default)]
    pub ndc_item: String,
    #[serde(default)]
    pub ndc9: String,
    #[serde(default)]
    pub ndc10: String,
    #[serde(rename = "splSetIdItem", default)]
    pub spl_set_id: String,
    #[serde(rename = "packagingList")]
    pub packaging_list: Option<PackagingList>,
    #[serde(rename = "propertyConceptList")]
    pub property_concept_list: Option<PropertyConceptList>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct PackagingList {
    #[serde(default)]
    pub packaging: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct PropertyConceptList {
    #[serde(rename = "propertyConcept", default)]
    pub property_concept: Vec<PropertyConcept>,
}

/// Name/value pair within an NDC property entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyConcept {
    #[serde(rename = "propName")]
    pub name: String,
    #[serde(rename = "propValue", default)]
    pub value: String,
}

impl NdcProperty {
    /// Packaging descriptions, empty when the source omitted the list.
    pub fn packaging(&self) -> &[String] {
        self.packaging_list
            .as_ref()
            .map(|l| l.packaging.as_slice())
            .unwrap_or(&[])
    }

    /// Value of the first property-concept entry with the given name.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.property_concept_list
            .as_ref()?
            .property_concept
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

impl NdcPropertiesResponse {
    /// All property entries, empty when the list is absent.
    pub fn into_properties(self) -> Vec<NdcProperty> {
        self.property_list.map(|l| l.ndc_property).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// GET /RxTerms/rxcui/{rxcui}/allinfo.json
// ---------------------------------------------------------------------------

/// Envelope for the RxTerms term-detail lookup.
#[derive(Debug, Deserialize)]
pub struct TermDetailsResponse {
    #[serde(rename = "rxtermsProperties")]
    pub properties: Option<TermDetails>,
}

/// RxTerms detail for a dispensable concept.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct TermDetails {
    #[serde(rename = "fullGenericName", default)]
    pub full_generic_name: String,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub strength: String,
}
