//! Kategorier, the product category register behind `/v1/kategorier`.
//!
//! The backend answers this list as a bare array. The params type pins a
//! fixed `limit` high enough to hold the whole register in one response;
//! the endpoint layer folds the array into the usual page envelope.

use kantine_client::ApiClient;
use kantine_core::{DisplayName, EntityDescriptor, EntityId, ListQuery};
use kantine_crud::CrudEndpoint;
use kantine_query::{EntityQueries, QueryClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PATH: &str = "/v1/kategorier";

const LIST_LIMIT: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kategori {
	pub kategoriid: EntityId,
	pub kategori: String,
	pub beskrivelse: Option<String>,
	pub ssma_timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KategoriCreate {
	pub kategori: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub beskrivelse: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KategoriUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub kategori: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub beskrivelse: Option<String>,
}

/// Fixed-limit list parameters; the register is small enough to fetch whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KategoriParams;

impl ListQuery for KategoriParams {
	fn query_pairs(&self) -> Vec<(String, String)> {
		vec![("limit".to_string(), LIST_LIMIT.to_string())]
	}
}

pub type KategoriEndpoint = CrudEndpoint<Kategori, KategoriCreate, KategoriUpdate, KategoriParams>;
pub type KategoriQueries = EntityQueries<Kategori, KategoriCreate, KategoriUpdate, KategoriParams>;

pub fn descriptor() -> EntityDescriptor<Kategori> {
	EntityDescriptor {
		entity_name: "kategorier",
		display_name: DisplayName::new("Kategori", "Kategorier"),
		get_id: |k| k.kategoriid,
		get_label: |k| {
			if k.kategori.is_empty() {
				"Kategori".to_string()
			} else {
				k.kategori.clone()
			}
		},
	}
}

pub fn api(client: Arc<ApiClient>) -> KategoriEndpoint {
	CrudEndpoint::new(client, PATH)
}

pub fn queries(client: Arc<ApiClient>, query: QueryClient) -> KategoriQueries {
	EntityQueries::new(descriptor(), api(client), query)
}
