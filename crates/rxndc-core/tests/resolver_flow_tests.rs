//! Resolver pipeline tests against a scripted in-memory API.
//!
//! The fake records every call so tests can assert not only what was
//! resolved but which endpoints were (and were not) touched.

use std::cell::RefCell;
use std::collections::HashMap;

use rxndc_core::api::{
    ActiveIngredient, ApiError, ApiResult, AtcClass, ClassMember, ConceptGroup, DirectoryField,
    DirectoryPackaging, DirectoryProduct, DrugApi, GroupConcept, NdcProperty, TermDetails,
};
use rxndc_core::api::rxnorm::{PackagingList, PropertyConcept, PropertyConceptList};
use rxndc_core::models::NOT_AVAILABLE;
use rxndc_core::{ClassResolver, DrugResolver};

#[derive(Default)]
struct ScriptedApi {
    rxcuis: Vec<String>,
    classes: Vec<AtcClass>,
    members: HashMap<String, Vec<ClassMember>>,
    related: HashMap<String, Vec<ConceptGroup>>,
    properties: HashMap<String, Vec<NdcProperty>>,
    details: HashMap<String, TermDetails>,
    products: HashMap<String, Vec<DirectoryProduct>>,
    directory_fails: bool,
    calls: RefCell<Vec<String>>,
}

impl ScriptedApi {
    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with(prefix))
    }

    fn call_count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == call).count()
    }
}

impl DrugApi for ScriptedApi {
    fn rxcuis_by_name(&self, name: &str) -> ApiResult<Vec<String>> {
        self.record(format!("rxcuis:{name}"));
        Ok(self.rxcuis.clone())
    }

    fn classes_by_name(&self, class_name: &str) -> ApiResult<Vec<AtcClass>> {
        self.record(format!("classes:{class_name}"));
        Ok(self.classes.clone())
    }

    fn class_members(&self, class_id: &str) -> ApiResult<Vec<ClassMember>> {
        self.record(format!("members:{class_id}"));
        Ok(self.members.get(class_id).cloned().unwrap_or_default())
    }

    fn related_concepts(&self, rxcui: &str, _ttys: &[&str]) -> ApiResult<Vec<ConceptGroup>> {
        self.record(format!("related:{rxcui}"));
        Ok(self.related.get(rxcui).cloned().unwrap_or_default())
    }

    fn ndc_properties(&self, rxcui: &str) -> ApiResult<Vec<NdcProperty>> {
        self.record(format!("properties:{rxcui}"));
        Ok(self.properties.get(rxcui).cloned().unwrap_or_default())
    }

    fn term_details(&self, rxcui: &str) -> ApiResult<Option<TermDetails>> {
        self.record(format!("details:{rxcui}"));
        Ok(self.details.get(rxcui).cloned())
    }

    fn directory_products(
        &self,
        field: DirectoryField,
        value: &str,
    ) -> ApiResult<Vec<DirectoryProduct>> {
        self.record(format!("directory:{}:{value}", field.query_field()));
        if self.directory_fails {
            return Err(ApiError::Status {
                url: "https://api.fda.gov/drug/ndc.json".into(),
                status: 404,
            });
        }
        Ok(self.products.get(value).cloned().unwrap_or_default())
    }
}

fn group(tty: &str, concepts: &[(&str, &str)]) -> ConceptGroup {
    ConceptGroup {
        tty: tty.into(),
        concept_properties: concepts
            .iter()
            .map(|(rxcui, name)| GroupConcept {
                rxcui: (*rxcui).into(),
                name: (*name).into(),
                synonym: String::new(),
            })
            .collect(),
    }
}

fn property(ndc11: &str, ndc9: &str, ndc10: &str) -> NdcProperty {
    NdcProperty {
        ndc_item: ndc11.into(),
        ndc9: ndc9.into(),
        ndc10: ndc10.into(),
        spl_set_id: "spl-1".into(),
        packaging_list: Some(PackagingList {
            packaging: vec!["100 TABLET in 1 BOTTLE".into()],
        }),
        property_concept_list: Some(PropertyConceptList {
            property_concept: vec![PropertyConcept {
                name: "LABELER".into(),
                value: "Mylan".into(),
            }],
        }),
    }
}

fn details(name: &str) -> TermDetails {
    TermDetails {
        full_generic_name: name.into(),
        route: "Oral Pill".into(),
        strength: "25 mg".into(),
    }
}

fn directory_product(generic: &str, brand: &str) -> DirectoryProduct {
    DirectoryProduct {
        product_ndc: "0378-0018".into(),
        generic_name: generic.into(),
        brand_name: brand.into(),
        labeler_name: "Mylan Pharmaceuticals Inc.".into(),
        spl_id: "spl-2".into(),
        route: vec!["ORAL".into()],
        active_ingredients: vec![ActiveIngredient {
            name: "METOPROLOL TARTRATE".into(),
            strength: "25 mg/1".into(),
        }],
        packaging: vec![DirectoryPackaging {
            package_ndc: "0378-0018-01".into(),
            description: "100 TABLET in 1 BOTTLE".into(),
        }],
    }
}

fn atc_class(id: &str, name: &str) -> AtcClass {
    AtcClass {
        class_id: id.into(),
        class_name: name.into(),
        class_type: "ATC1-4".into(),
    }
}

fn member(rxcui: &str, name: &str, tty: &str) -> ClassMember {
    ClassMember {
        rxcui: rxcui.into(),
        name: name.into(),
        tty: tty.into(),
    }
}

// ---------------------------------------------------------------------------
// DrugResolver
// ---------------------------------------------------------------------------

#[test]
fn test_drug_without_matches_returns_empty_and_skips_fallback() {
    let api = ScriptedApi::default();

    let records = DrugResolver::new(&api).resolve("no-such-drug").unwrap();

    assert!(records.is_empty());
    assert!(!api.called("directory:"));
    assert!(!api.called("related:"));
}

#[test]
fn test_drug_end_to_end_two_concepts() {
    let mut api = ScriptedApi::default();
    api.rxcuis = vec!["6918".into()];
    api.related.insert(
        "6918".into(),
        vec![
            group("SCD", &[("866514", "metoprolol tartrate 25 MG Oral Tablet")]),
            group("SBD", &[("866924", "metoprolol tartrate 25 MG Oral Tablet [Lopressor]")]),
        ],
    );
    api.properties.insert(
        "866514".into(),
        vec![property("00378001801", "0378-0018", "0378-0018-01")],
    );
    api.properties.insert(
        "866924".into(),
        vec![property("00078043115", "0078-0431", "0078-0431-15")],
    );
    api.details
        .insert("866514".into(), details("Metoprolol Tartrate 25 MG Oral Tablet"));
    api.details
        .insert("866924".into(), details("Metoprolol Tartrate 25 MG Oral Tablet"));

    let records = DrugResolver::new(&api).resolve("metoprolol").unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.rxcui != NOT_AVAILABLE));
    assert_eq!(records[0].term_type, "SCD");
    assert_eq!(records[1].term_type, "SBD");
    assert!(!api.called("directory:"));
}

#[test]
fn test_drug_without_related_concepts_uses_fallback_only() {
    let mut api = ScriptedApi::default();
    api.rxcuis = vec!["6918".into()];
    api.products.insert(
        "metoprolol".into(),
        vec![directory_product("metoprolol tartrate", "Lopressor")],
    );

    let records = DrugResolver::new(&api).resolve("metoprolol").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rxcui, NOT_AVAILABLE);
    assert_eq!(records[0].name, "metoprolol tartrate (Lopressor)");
    assert!(api.called("directory:generic_name:metoprolol"));
    assert!(!api.called("properties:"));
}

#[test]
fn test_drug_duplicate_concepts_fetched_once() {
    let mut api = ScriptedApi::default();
    api.rxcuis = vec!["6918".into(), "866924".into()];
    // Both identifiers lead to the same related concept.
    let same = group("SCD", &[("866514", "metoprolol tartrate 25 MG Oral Tablet")]);
    api.related.insert("6918".into(), vec![same.clone()]);
    api.related.insert("866924".into(), vec![same]);
    api.properties.insert(
        "866514".into(),
        vec![property("00378001801", "0378-0018", "0378-0018-01")],
    );
    api.details
        .insert("866514".into(), details("Metoprolol Tartrate 25 MG Oral Tablet"));

    let records = DrugResolver::new(&api).resolve("metoprolol").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(api.call_count("properties:866514"), 1);
}

#[test]
fn test_drug_fallback_error_swallowed() {
    let mut api = ScriptedApi::default();
    api.rxcuis = vec!["6918".into()];
    api.directory_fails = true;

    let records = DrugResolver::new(&api).resolve("metoprolol").unwrap();

    assert!(records.is_empty());
    assert!(api.called("directory:"));
}

#[test]
fn test_drug_concept_without_term_details_contributes_no_records() {
    let mut api = ScriptedApi::default();
    api.rxcuis = vec!["6918".into()];
    api.related.insert(
        "6918".into(),
        vec![group("SCD", &[("866514", "metoprolol tartrate 25 MG Oral Tablet")])],
    );
    api.properties.insert(
        "866514".into(),
        vec![property("00378001801", "0378-0018", "0378-0018-01")],
    );
    // No term details scripted for 866514.

    let records = DrugResolver::new(&api).resolve("metoprolol").unwrap();

    assert!(records.is_empty());
    assert!(api.called("properties:866514"));
}

// ---------------------------------------------------------------------------
// ClassResolver
// ---------------------------------------------------------------------------

#[test]
fn test_class_without_matches_returns_empty_and_issues_no_further_calls() {
    let api = ScriptedApi::default();

    let records = ClassResolver::new(&api).resolve("no-such-class").unwrap();

    assert!(records.is_empty());
    assert!(!api.called("members:"));
    assert!(!api.called("directory:"));
}

#[test]
fn test_class_primary_path_skips_ingredient_members() {
    let mut api = ScriptedApi::default();
    api.classes = vec![atc_class("C07AB", "Beta blocking agents, selective")];
    api.members.insert(
        "C07AB".into(),
        vec![member("6918", "metoprolol", "IN")],
    );
    api.related.insert(
        "6918".into(),
        vec![group("SCD", &[("866514", "metoprolol tartrate 25 MG Oral Tablet")])],
    );
    api.properties.insert(
        "866514".into(),
        vec![property("00378001801", "0378-0018", "0378-0018-01")],
    );
    api.details
        .insert("866514".into(), details("Metoprolol Tartrate 25 MG Oral Tablet"));

    let records = ClassResolver::new(&api).resolve("beta blocking").unwrap();

    // Only the SCD concept is looked up; the ingredient member is not.
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rxcui, "866514");
    assert!(!api.called("properties:6918"));
    assert!(!api.called("directory:"));
}

#[test]
fn test_class_ingredient_only_members_fall_back_per_member() {
    let mut api = ScriptedApi::default();
    api.classes = vec![
        atc_class("C07AB", "Beta blocking agents, selective"),
        atc_class("C07AA", "Beta blocking agents, non-selective"),
    ];
    api.members.insert(
        "C07AB".into(),
        vec![member("6918", "metoprolol", "IN")],
    );
    api.members.insert(
        "C07AA".into(),
        vec![member("8787", "propranolol", "IN")],
    );
    api.products.insert(
        "metoprolol".into(),
        vec![directory_product("metoprolol tartrate", "Lopressor")],
    );
    api.products.insert(
        "propranolol".into(),
        vec![directory_product("propranolol hydrochloride", "Inderal")],
    );

    let records = ClassResolver::new(&api).resolve("beta blocking").unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.rxcui == NOT_AVAILABLE));
    assert!(api.called("directory:generic_name:metoprolol"));
    assert!(api.called("directory:generic_name:propranolol"));
    // Members are fetched once while traversing and once for the fallback sweep.
    assert_eq!(api.call_count("members:C07AB"), 2);
    assert_eq!(api.call_count("members:C07AA"), 2);
}

#[test]
fn test_class_member_fallback_failures_do_not_abort_the_class() {
    let mut api = ScriptedApi::default();
    api.classes = vec![atc_class("C07AB", "Beta blocking agents, selective")];
    api.members.insert(
        "C07AB".into(),
        vec![
            member("6918", "metoprolol", "IN"),
            member("8787", "propranolol", "IN"),
        ],
    );
    api.directory_fails = true;

    let records = ClassResolver::new(&api).resolve("beta blocking").unwrap();

    assert!(records.is_empty());
    // Both members were still attempted.
    assert!(api.called("directory:generic_name:metoprolol"));
    assert!(api.called("directory:generic_name:propranolol"));
}

#[test]
fn test_class_duplicate_members_across_classes_visited_once() {
    let mut api = ScriptedApi::default();
    api.classes = vec![
        atc_class("C07AB", "Beta blocking agents, selective"),
        atc_class("C07AA", "Beta blocking agents, non-selective"),
    ];
    let shared = member("6918", "metoprolol", "IN");
    api.members.insert("C07AB".into(), vec![shared.clone()]);
    api.members.insert("C07AA".into(), vec![shared]);
    api.related.insert(
        "6918".into(),
        vec![group("SCD", &[("866514", "metoprolol tartrate 25 MG Oral Tablet")])],
    );
    api.properties.insert(
        "866514".into(),
        vec![property("00378001801", "0378-0018", "0378-0018-01")],
    );
    api.details
        .insert("866514".into(), details("Metoprolol Tartrate 25 MG Oral Tablet"));

    let records = ClassResolver::new(&api).resolve("beta blocking").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(api.call_count("related:6918"), 1);
}
