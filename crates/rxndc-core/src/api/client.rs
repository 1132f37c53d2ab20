//! Blocking HTTP client for RxNav and the openFDA NDC directory.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::info;

use super::openfda::DirectoryResponse;
use super::rxnorm::{
    ClassLookupResponse, ClassMembersResponse, NdcPropertiesResponse, RelatedResponse,
    RxcuiLookupResponse, TermDetailsResponse,
};
use super::{
    ApiError, ApiResult, AtcClass, ClassMember, ConceptGroup, DirectoryField, DirectoryProduct,
    DrugApi, NdcProperty, TermDetails,
};

const RXNAV_BASE: &str = "https://rxnav.nlm.nih.gov/REST";
const NDC_DIRECTORY_URL: &str = "https://api.fda.gov/drug/ndc.json";
const DIRECTORY_PAGE_SIZE: u32 = 100;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP access to both pharmaceutical services.
///
/// One client is built per run and every call blocks the calling step. The
/// `quiet` flag suppresses the per-request progress line.
pub struct PharmaClient {
    http: Client,
    quiet: bool,
}

impl PharmaClient {
    /// Build a client with a request timeout and a static User-Agent.
    pub fn new(quiet: bool) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("rxndc/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, quiet })
    }

    /// GET `url` with query parameters and decode the JSON body.
    fn get_json<T: DeserializeOwned>(&self, url: &str, params: &[(&str, &str)]) -> ApiResult<T> {
        if !self.quiet {
            info!("querying {url}");
        }
        let response = self.http.get(url).query(params).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text()?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl DrugApi for PharmaClient {
    fn rxcuis_by_name(&self, name: &str) -> ApiResult<Vec<String>> {
        let url = format!("{RXNAV_BASE}/rxcui.json");
        let response: RxcuiLookupResponse =
            self.get_json(&url, &[("name", name), ("search", "2")])?;
        Ok(response.into_ids())
    }

    fn classes_by_name(&self, class_name: &str) -> ApiResult<Vec<AtcClass>> {
        let url = format!("{RXNAV_BASE}/rxclass/class/byName.json");
        let response: ClassLookupResponse =
            self.get_json(&url, &[("className", class_name), ("classTypes", "ATC1-4")])?;
        Ok(response.into_classes())
    }

    fn class_members(&self, class_id: &str) -> ApiResult<Vec<ClassMember>> {
        let url = format!("{RXNAV_BASE}/rxclass/classMembers.json");
        let response: ClassMembersResponse =
            self.get_json(&url, &[("classId", class_id), ("relaSource", "ATC")])?;
        Ok(response.into_members())
    }

    fn related_concepts(&self, rxcui: &str, ttys: &[&str]) -> ApiResult<Vec<ConceptGroup>> {
        let url = format!("{RXNAV_BASE}/rxcui/{rxcui}/related.json");
        let tty_param = ttys.join(" ");
        let response: RelatedResponse = self.get_json(&url, &[("tty", tty_param.as_str())])?;
        Ok(response.into_groups())
    }

    fn ndc_properties(&self, rxcui: &str) -> ApiResult<Vec<NdcProperty>> {
        let url = format!("{RXNAV_BASE}/rxcui/{rxcui}/ndcproperties.json");
        let response: NdcPropertiesResponse = self.get_json(&url, &[])?;
        Ok(response.into_properties())
    }

    fn term_details(&self, rxcui: &str) -> ApiResult<Option<TermDetails>> {
        let url = format!("{RXNAV_BASE}/RxTerms/rxcui/{rxcui}/allinfo.json");
        let response: TermDetailsResponse = self.get_json(&url, &[])?;
        Ok(response.properties)
    }

    fn directory_products(
        &self,
        field: DirectoryField,
        value: &str,
    ) -> ApiResult<Vec<DirectoryProduct>> {
        // The directory answers "no matches" with an HTTP 404 error envelope;
        // that surfaces as ApiError::Status, which fallback callers tolerate.
        let search = format!("{}:\"{}\"", field.query_field(), value);
        let limit = DIRECTORY_PAGE_SIZE.to_string();
        let response: DirectoryResponse = self.get_json(
            NDC_DIRECTORY_URL,
            &[("search", search.as_str()), ("limit", limit.as_str())],
        )?;
        Ok(response.results)
    }
}
