//! Kundegrupper, the customer group register behind `/v1/kunde-gruppe`.

use kantine_client::ApiClient;
use kantine_core::{DisplayName, EntityDescriptor, EntityId, ListQuery};
use kantine_crud::CrudEndpoint;
use kantine_query::{EntityQueries, QueryClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PATH: &str = "/v1/kunde-gruppe";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kundegruppe {
	pub gruppeid: EntityId,
	pub gruppe: String,
	pub webshop: bool,
	pub autofaktura: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KundegruppeCreate {
	pub gruppe: String,
	pub webshop: bool,
	pub autofaktura: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KundegruppeUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gruppe: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub webshop: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub autofaktura: Option<bool>,
}

/// The group list takes no parameters; the backend returns every group as
/// a bare array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KundegruppeParams;

impl ListQuery for KundegruppeParams {
	fn query_pairs(&self) -> Vec<(String, String)> {
		Vec::new()
	}
}

pub type KundegruppeEndpoint =
	CrudEndpoint<Kundegruppe, KundegruppeCreate, KundegruppeUpdate, KundegruppeParams>;
pub type KundegruppeQueries =
	EntityQueries<Kundegruppe, KundegruppeCreate, KundegruppeUpdate, KundegruppeParams>;

pub fn descriptor() -> EntityDescriptor<Kundegruppe> {
	EntityDescriptor {
		entity_name: "kundegrupper",
		display_name: DisplayName::new("Kundegruppe", "Kundegrupper"),
		get_id: |g| g.gruppeid,
		get_label: |g| g.gruppe.clone(),
	}
}

pub fn api(client: Arc<ApiClient>) -> KundegruppeEndpoint {
	CrudEndpoint::new(client, PATH)
}

pub fn queries(client: Arc<ApiClient>, query: QueryClient) -> KundegruppeQueries {
	EntityQueries::new(descriptor(), api(client), query)
}
