//! Kunder, the customer register behind `/v1/kunde`.

use kantine_client::ApiClient;
use kantine_core::{DisplayName, EntityDescriptor, EntityId};
use kantine_crud::CrudEndpoint;
use kantine_query::{EntityQueries, QueryClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PATH: &str = "/v1/kunde";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kunde {
	pub kundeid: EntityId,
	pub kundenavn: String,
	pub gruppeid: Option<EntityId>,
	/// Stored as a decimal on the backend; see [`Kunde::menygruppe`].
	pub menygruppeid: Option<f64>,
	#[serde(default)]
	pub aktiv: bool,
}

impl Kunde {
	/// Menu group id with the backend's decimal noise floored away.
	pub fn menygruppe(&self) -> Option<EntityId> {
		self.menygruppeid.map(|id| id.floor() as EntityId)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KundeCreate {
	pub kundenavn: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gruppeid: Option<EntityId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub menygruppeid: Option<f64>,
	pub aktiv: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KundeUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub kundenavn: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gruppeid: Option<EntityId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub menygruppeid: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub aktiv: Option<bool>,
}

pub type KundeEndpoint = CrudEndpoint<Kunde, KundeCreate, KundeUpdate>;
pub type KundeQueries = EntityQueries<Kunde, KundeCreate, KundeUpdate>;

pub fn descriptor() -> EntityDescriptor<Kunde> {
	EntityDescriptor {
		entity_name: "kunder",
		display_name: DisplayName::new("Kunde", "Kunder"),
		get_id: |k| k.kundeid,
		get_label: |k| {
			if k.kundenavn.is_empty() {
				"Kunde".to_string()
			} else {
				k.kundenavn.clone()
			}
		},
	}
}

pub fn api(client: Arc<ApiClient>) -> KundeEndpoint {
	CrudEndpoint::new(client, PATH)
}

pub fn queries(client: Arc<ApiClient>, query: QueryClient) -> KundeQueries {
	EntityQueries::new(descriptor(), api(client), query)
}
