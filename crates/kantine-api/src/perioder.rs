//! Perioder, the menu period register behind `/v1/perioder`.
//!
//! Besides the generic CRUD set, the ordering flow reads periods with
//! their menus and products attached: [`active`] for the selectable
//! periods and [`with_menus`] for one period's full menu tree. Both are
//! cached under `perioder`-tagged keys, so period mutations flush them
//! together with the plain lists.

use chrono::NaiveDate;
use kantine_client::ApiClient;
use kantine_core::{DisplayName, EntityDescriptor, EntityId, Result};
use kantine_crud::CrudEndpoint;
use kantine_query::{EntityQueries, QueryClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PATH: &str = "/v1/perioder";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Periode {
	pub menyperiodeid: EntityId,
	pub ukenr: Option<u32>,
	pub fradato: Option<NaiveDate>,
	pub tildato: Option<NaiveDate>,
	#[serde(default)]
	pub aktiv: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodeCreate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ukenr: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fradato: Option<NaiveDate>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tildato: Option<NaiveDate>,
	pub aktiv: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodeUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ukenr: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fradato: Option<NaiveDate>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tildato: Option<NaiveDate>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub aktiv: Option<bool>,
}

/// One product on a menu, as the ordering grid shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenyProdukt {
	pub produktid: EntityId,
	pub produktnavn: Option<String>,
	pub visningsnavn: Option<String>,
}

impl MenyProdukt {
	/// Grid label; the display name wins over the product name.
	pub fn navn(&self) -> &str {
		self.visningsnavn
			.as_deref()
			.or(self.produktnavn.as_deref())
			.unwrap_or("")
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meny {
	pub menyid: EntityId,
	#[serde(default)]
	pub produkter: Vec<MenyProdukt>,
}

/// A period with its menu tree attached, as served by the ordering reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodeMedMenyer {
	pub menyperiodeid: EntityId,
	pub ukenr: Option<u32>,
	pub fradato: Option<NaiveDate>,
	pub tildato: Option<NaiveDate>,
	#[serde(default)]
	pub aktiv: bool,
	#[serde(default)]
	pub menyer: Vec<Meny>,
}

pub type PeriodeEndpoint = CrudEndpoint<Periode, PeriodeCreate, PeriodeUpdate>;
pub type PeriodeQueries = EntityQueries<Periode, PeriodeCreate, PeriodeUpdate>;

pub fn descriptor() -> EntityDescriptor<Periode> {
	EntityDescriptor {
		entity_name: "perioder",
		display_name: DisplayName::new("Periode", "Perioder"),
		get_id: |p| p.menyperiodeid,
		get_label: |p| match p.ukenr {
			Some(uke) => format!("Uke {}", uke),
			None => format!("Periode {}", p.menyperiodeid),
		},
	}
}

pub fn api(client: Arc<ApiClient>) -> PeriodeEndpoint {
	CrudEndpoint::new(client, PATH)
}

pub fn queries(client: Arc<ApiClient>, query: QueryClient) -> PeriodeQueries {
	EntityQueries::new(descriptor(), api(client), query)
}

/// Fetches the active periods with menus, optionally narrowed to one menu
/// group, serving from cache when possible.
pub async fn active(
	queries: &PeriodeQueries,
	menygruppe_id: Option<EntityId>,
) -> Result<Vec<PeriodeMedMenyer>> {
	let key = match menygruppe_id {
		Some(id) => format!("perioder/active?menygruppe_id={}", id),
		None => "perioder/active".to_string(),
	};
	if let Some(cached) = queries
		.client()
		.cache()
		.get::<Vec<PeriodeMedMenyer>>(&key)
		.await?
	{
		return Ok(cached);
	}

	let query = menygruppe_id
		.map(|id| format!("menygruppe_id={}", id))
		.unwrap_or_default();
	let perioder: Vec<PeriodeMedMenyer> = queries
		.endpoint()
		.client()
		.get_with_query(&format!("{}/active", PATH), &query)
		.await?;

	queries
		.client()
		.cache()
		.set_with_tags(&key, &perioder, None, &[queries.descriptor().entity_name])
		.await?;
	Ok(perioder)
}

/// Fetches one period's menu tree, serving from cache when possible.
pub async fn with_menus(queries: &PeriodeQueries, id: EntityId) -> Result<PeriodeMedMenyer> {
	let key = format!("perioder/{}/menyer", id);
	if let Some(cached) = queries
		.client()
		.cache()
		.get::<PeriodeMedMenyer>(&key)
		.await?
	{
		return Ok(cached);
	}

	let periode: PeriodeMedMenyer = queries
		.endpoint()
		.client()
		.get(&format!("{}/{}/menyer", PATH, id))
		.await?;

	queries
		.client()
		.cache()
		.set_with_tags(&key, &periode, None, &[queries.descriptor().entity_name])
		.await?;
	Ok(periode)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_label_prefers_week_number() {
		let d = descriptor();
		let med_uke = Periode {
			menyperiodeid: 12,
			ukenr: Some(34),
			fradato: None,
			tildato: None,
			aktiv: true,
		};
		let uten_uke = Periode {
			ukenr: None,
			..med_uke.clone()
		};

		assert_eq!(d.label_of(&med_uke), "Uke 34");
		assert_eq!(d.label_of(&uten_uke), "Periode 12");
	}

	#[test]
	fn test_produkt_navn_prefers_visningsnavn() {
		let produkt = MenyProdukt {
			produktid: 9,
			produktnavn: Some("Lapskaus m/flatbrød".to_string()),
			visningsnavn: Some("Lapskaus".to_string()),
		};
		assert_eq!(produkt.navn(), "Lapskaus");

		let uten_visning = MenyProdukt {
			visningsnavn: None,
			..produkt
		};
		assert_eq!(uten_visning.navn(), "Lapskaus m/flatbrød");
	}
}
