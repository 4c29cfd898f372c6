//! Ordre, order registration behind `/v1/ordre`.
//!
//! Orders are write-only from the dashboard: the ordering page builds one
//! request per customer with lines grouped per period, and the backend
//! answers with a receipt. There is no list/get/update surface.

use kantine_client::ApiClient;
use kantine_core::{EntityId, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PATH: &str = "/v1/ordre";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdreLinje {
	pub produktid: EntityId,
	pub antall: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdrePeriode {
	pub periodeid: EntityId,
	pub linjer: Vec<OrdreLinje>,
}

impl OrdrePeriode {
	/// Builds a period entry, dropping lines without a positive count.
	pub fn med_linjer(periodeid: EntityId, linjer: Vec<OrdreLinje>) -> Self {
		Self {
			periodeid,
			linjer: linjer.into_iter().filter(|l| l.antall > 0).collect(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdreCreate {
	pub kundeid: EntityId,
	pub perioder: Vec<OrdrePeriode>,
}

impl OrdreCreate {
	/// True when at least one line carries a positive count; requests
	/// without lines are rejected client-side before any call is made.
	pub fn har_linjer(&self) -> bool {
		self.perioder
			.iter()
			.any(|p| p.linjer.iter().any(|l| l.antall > 0))
	}
}

/// Backend receipt for a registered order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdreKvittering {
	pub ordreid: EntityId,
	pub melding: String,
}

#[derive(Debug, Clone)]
pub struct OrdreApi {
	client: Arc<ApiClient>,
}

impl OrdreApi {
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	pub async fn opprett(&self, ordre: &OrdreCreate) -> Result<OrdreKvittering> {
		self.client.post(PATH, ordre).await
	}
}
