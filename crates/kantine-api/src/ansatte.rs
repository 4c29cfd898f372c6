//! Ansatte, the employee register behind `/v1/ansatte`.
//!
//! This endpoint speaks offset pagination. [`AnsattParams`] keeps the
//! page-based builder surface and converts to `skip`/`limit` when the
//! query string is built, so callers never deal with offsets.

use chrono::NaiveDate;
use kantine_client::ApiClient;
use kantine_core::{DisplayName, EntityDescriptor, EntityId, ListParams, ListQuery, SortOrder};
use kantine_crud::CrudEndpoint;
use kantine_query::{EntityQueries, QueryClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PATH: &str = "/v1/ansatte";

/// Rows per page when a page is requested without an explicit size.
const DEFAULT_LIMIT: u64 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ansatt {
	pub ansattid: EntityId,
	pub fornavn: String,
	pub etternavn: String,
	pub tittel: Option<String>,
	pub avdeling: Option<String>,
	pub e_postjobb: Option<String>,
	pub tlfprivat: Option<String>,
	/// Set when the employment has ended.
	pub sluttet: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsattCreate {
	pub fornavn: String,
	pub etternavn: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tittel: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub avdeling: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub e_postjobb: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tlfprivat: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnsattUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fornavn: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub etternavn: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tittel: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub avdeling: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub e_postjobb: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tlfprivat: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sluttet: Option<NaiveDate>,
}

/// List parameters for `/v1/ansatte`: common paging plus the employee
/// filters, serialized in offset style.
///
/// # Examples
///
/// ```
/// use kantine_api::ansatte::AnsattParams;
/// use kantine_core::ListQuery;
///
/// let params = AnsattParams::new().page(3).page_size(25).avdeling("Kjøkken");
/// assert_eq!(params.query_string(), "skip=50&limit=25&avdeling=Kj%C3%B8kken");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnsattParams {
	pub list: ListParams,
	pub aktiv: Option<bool>,
	pub avdeling: Option<String>,
}

impl AnsattParams {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn page(mut self, page: u64) -> Self {
		self.list.page = Some(page);
		self
	}

	pub fn page_size(mut self, page_size: u64) -> Self {
		self.list.page_size = Some(page_size);
		self
	}

	pub fn search(mut self, search: impl Into<String>) -> Self {
		self.list.search = Some(search.into());
		self
	}

	pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
		self.list.sort_by = Some(field.into());
		self.list.sort_order = Some(order);
		self
	}

	pub fn aktiv(mut self, aktiv: bool) -> Self {
		self.aktiv = Some(aktiv);
		self
	}

	pub fn avdeling(mut self, avdeling: impl Into<String>) -> Self {
		self.avdeling = Some(avdeling.into());
		self
	}
}

impl ListQuery for AnsattParams {
	fn query_pairs(&self) -> Vec<(String, String)> {
		let mut pairs = Vec::new();
		let limit = self.list.page_size.unwrap_or(DEFAULT_LIMIT);
		if let Some(page) = self.list.page {
			pairs.push(("skip".to_string(), ((page.max(1) - 1) * limit).to_string()));
		}
		if self.list.page.is_some() || self.list.page_size.is_some() {
			pairs.push(("limit".to_string(), limit.to_string()));
		}
		if let Some(search) = &self.list.search {
			pairs.push(("search".to_string(), search.clone()));
		}
		if let Some(sort_by) = &self.list.sort_by {
			pairs.push(("sort_by".to_string(), sort_by.clone()));
		}
		if let Some(sort_order) = self.list.sort_order {
			pairs.push(("sort_order".to_string(), sort_order.as_str().to_string()));
		}
		if let Some(aktiv) = self.aktiv {
			pairs.push(("aktiv".to_string(), aktiv.to_string()));
		}
		if let Some(avdeling) = &self.avdeling {
			pairs.push(("avdeling".to_string(), avdeling.clone()));
		}
		pairs
	}
}

pub type AnsattEndpoint = CrudEndpoint<Ansatt, AnsattCreate, AnsattUpdate, AnsattParams>;
pub type AnsattQueries = EntityQueries<Ansatt, AnsattCreate, AnsattUpdate, AnsattParams>;

pub fn descriptor() -> EntityDescriptor<Ansatt> {
	EntityDescriptor {
		entity_name: "ansatte",
		display_name: DisplayName::new("Ansatt", "Ansatte"),
		get_id: |a| a.ansattid,
		get_label: |a| format!("{} {}", a.fornavn, a.etternavn).trim().to_string(),
	}
}

pub fn api(client: Arc<ApiClient>) -> AnsattEndpoint {
	CrudEndpoint::new(client, PATH)
}

pub fn queries(client: Arc<ApiClient>, query: QueryClient) -> AnsattQueries {
	EntityQueries::new(descriptor(), api(client), query)
}
