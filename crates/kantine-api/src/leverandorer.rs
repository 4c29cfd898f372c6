//! Leverandører, the supplier register behind `/v1/leverandorer`.

use kantine_client::ApiClient;
use kantine_core::{DisplayName, EntityDescriptor, EntityId, ListParams, ListQuery, SortOrder};
use kantine_crud::CrudEndpoint;
use kantine_query::{EntityQueries, QueryClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PATH: &str = "/v1/leverandorer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leverandor {
	pub leverandorid: EntityId,
	pub leverandornavn: String,
	#[serde(default)]
	pub aktiv: bool,
	pub ssma_timestamp: Option<String>,
}

/// Create payload; `leverandorid` and `ssma_timestamp` are server-owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeverandorCreate {
	pub leverandornavn: String,
	pub aktiv: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeverandorUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub leverandornavn: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub aktiv: Option<bool>,
}

/// Common paging plus the supplier `aktiv` filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeverandorParams {
	pub list: ListParams,
	pub aktiv: Option<bool>,
}

impl LeverandorParams {
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
}

impl ListQuery for LeverandorParams {
	fn query_pairs(&self) -> Vec<(String, String)> {
		let mut pairs = self.list.query_pairs();
		if let Some(aktiv) = self.aktiv {
			pairs.push(("aktiv".to_string(), aktiv.to_string()));
		}
		pairs
	}
}

pub type LeverandorEndpoint =
	CrudEndpoint<Leverandor, LeverandorCreate, LeverandorUpdate, LeverandorParams>;
pub type LeverandorQueries =
	EntityQueries<Leverandor, LeverandorCreate, LeverandorUpdate, LeverandorParams>;

pub fn descriptor() -> EntityDescriptor<Leverandor> {
	EntityDescriptor {
		entity_name: "leverandorer",
		display_name: DisplayName::new("Leverandør", "Leverandører"),
		get_id: |l| l.leverandorid,
		get_label: |l| {
			if l.leverandornavn.is_empty() {
				"Leverandør".to_string()
			} else {
				l.leverandornavn.clone()
			}
		},
	}
}

pub fn api(client: Arc<ApiClient>) -> LeverandorEndpoint {
	CrudEndpoint::new(client, PATH)
}

pub fn queries(client: Arc<ApiClient>, query: QueryClient) -> LeverandorQueries {
	EntityQueries::new(descriptor(), api(client), query)
}
