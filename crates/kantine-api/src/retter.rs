//! Kombinerte retter, the combined dish register behind `/v1/combined-dishes`.
//!
//! A combined dish stitches together recipe components (by calculation
//! code) and product components (by product id), each with a gram amount.
//! Create and update payloads reference the components; responses carry
//! them resolved with names.

use chrono::{DateTime, Utc};
use kantine_client::ApiClient;
use kantine_core::{DisplayName, EntityDescriptor, EntityId};
use kantine_crud::CrudEndpoint;
use kantine_query::{EntityQueries, QueryClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PATH: &str = "/v1/combined-dishes";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OppskriftKomponent {
	pub id: EntityId,
	pub kalkylekode: i64,
	pub kalkylenavn: String,
	pub amount_grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProduktKomponent {
	pub id: EntityId,
	pub produktid: EntityId,
	pub produktnavn: String,
	pub visningsnavn: Option<String>,
	pub amount_grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KombinertRett {
	pub id: EntityId,
	pub name: String,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
	pub created_by_user_id: Option<EntityId>,
	#[serde(default)]
	pub recipe_components: Vec<OppskriftKomponent>,
	#[serde(default)]
	pub product_components: Vec<ProduktKomponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OppskriftKomponentCreate {
	pub kalkylekode: i64,
	pub amount_grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProduktKomponentCreate {
	pub produktid: EntityId,
	pub amount_grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KombinertRettCreate {
	pub name: String,
	pub recipes: Vec<OppskriftKomponentCreate>,
	pub products: Vec<ProduktKomponentCreate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KombinertRettUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipes: Option<Vec<OppskriftKomponentCreate>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub products: Option<Vec<ProduktKomponentCreate>>,
}

pub type KombinertRettEndpoint =
	CrudEndpoint<KombinertRett, KombinertRettCreate, KombinertRettUpdate>;
pub type KombinertRettQueries =
	EntityQueries<KombinertRett, KombinertRettCreate, KombinertRettUpdate>;

pub fn descriptor() -> EntityDescriptor<KombinertRett> {
	EntityDescriptor {
		entity_name: "retter",
		display_name: DisplayName::new("Kombinert rett", "Kombinerte retter"),
		get_id: |r| r.id,
		get_label: |r| r.name.clone(),
	}
}

pub fn api(client: Arc<ApiClient>) -> KombinertRettEndpoint {
	CrudEndpoint::new(client, PATH)
}

pub fn queries(client: Arc<ApiClient>, query: QueryClient) -> KombinertRettQueries {
	EntityQueries::new(descriptor(), api(client), query)
}
