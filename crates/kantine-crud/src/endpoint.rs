//! Generic REST endpoint with the five CRUD operations.

use kantine_client::ApiClient;
use kantine_core::{EntityId, ListPage, ListParams, ListQuery, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;

/// List bodies arrive either as the canonical page envelope or as a bare
/// array from endpoints that never learned to paginate.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
	Paged(ListPage<T>),
	Bare(Vec<T>),
}

impl<T> ListBody<T> {
	fn normalize(self) -> ListPage<T> {
		match self {
			ListBody::Paged(page) => page,
			ListBody::Bare(items) => ListPage::from_items(items),
		}
	}
}

/// Typed CRUD access to one REST resource.
///
/// `T` is the entity as the backend returns it, `C` and `U` are the create
/// and update payloads, and `P` decides how listing arguments reach the
/// wire. Entities whose payloads match the entity itself just reuse `T`.
///
/// # Example
/// ```ignore
/// let client = Arc::new(ApiClient::new("http://localhost:8000/api")?);
/// let kunder: CrudEndpoint<Kunde, NyKunde, OppdaterKunde> =
/// 	CrudEndpoint::new(client, "/v1/kunder");
/// let side = kunder.list(&ListParams::new().page(1).page_size(20)).await?;
/// ```
pub struct CrudEndpoint<T, C, U, P = ListParams> {
	client: Arc<ApiClient>,
	path: String,
	_marker: PhantomData<(T, C, U, P)>,
}

impl<T, C, U, P> Clone for CrudEndpoint<T, C, U, P> {
	fn clone(&self) -> Self {
		Self {
			client: Arc::clone(&self.client),
			path: self.path.clone(),
			_marker: PhantomData,
		}
	}
}

impl<T, C, U, P> CrudEndpoint<T, C, U, P>
where
	T: DeserializeOwned,
	C: Serialize,
	U: Serialize,
	P: ListQuery,
{
	/// Creates an endpoint rooted at `path`, relative to the client's base URL.
	pub fn new(client: Arc<ApiClient>, path: impl Into<String>) -> Self {
		let path = path.into();
		Self {
			client,
			path: path.strip_suffix('/').map(str::to_string).unwrap_or(path),
			_marker: PhantomData,
		}
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	/// The shared client, for resource-specific endpoints beyond plain CRUD.
	pub fn client(&self) -> &Arc<ApiClient> {
		&self.client
	}

	fn item_path(&self, id: EntityId) -> String {
		format!("{}/{}", self.path, id)
	}

	/// Fetches one page of the resource.
	///
	/// Bare-array responses are folded into a single-page envelope, so
	/// callers always see [`ListPage`].
	pub async fn list(&self, params: &P) -> Result<ListPage<T>> {
		let body: ListBody<T> = self
			.client
			.get_with_query(&self.path, &params.query_string())
			.await?;
		Ok(body.normalize())
	}

	pub async fn get(&self, id: EntityId) -> Result<T> {
		self.client.get(&self.item_path(id)).await
	}

	pub async fn create(&self, payload: &C) -> Result<T> {
		self.client.post(&self.path, payload).await
	}

	pub async fn update(&self, id: EntityId, payload: &U) -> Result<T> {
		self.client.put(&self.item_path(id), payload).await
	}

	pub async fn delete(&self, id: EntityId) -> Result<()> {
		self.client.delete(&self.item_path(id)).await
	}
}
