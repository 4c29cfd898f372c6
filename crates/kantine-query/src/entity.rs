//! Entity query factory: cached reads, invalidating mutations, polling.
//!
//! [`EntityQueries`] is built once per entity from a descriptor and a CRUD
//! endpoint. Reads check the tagged cache first. Mutations call the
//! backend, invalidate everything cached for the entity, push a localized
//! notification, and only then resolve, so a caller chaining on the
//! returned future always observes a settled cache and message store.

use crate::client::QueryClient;
use kantine_core::{
	CrudOp, EntityDescriptor, EntityId, Error, ListPage, ListParams, ListQuery, Result,
	crud_failure_message,
};
use kantine_crud::CrudEndpoint;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Lifecycle of one observed query.
#[derive(Debug, Clone, Default)]
pub enum QueryState<T> {
	/// Nothing requested yet.
	#[default]
	Idle,
	Loading,
	Ready(T),
	Failed(Error),
}

impl<T> QueryState<T> {
	pub fn is_loading(&self) -> bool {
		matches!(self, QueryState::Loading)
	}

	pub fn value(&self) -> Option<&T> {
		match self {
			QueryState::Ready(value) => Some(value),
			_ => None,
		}
	}

	pub fn error(&self) -> Option<&Error> {
		match self {
			QueryState::Failed(error) => Some(error),
			_ => None,
		}
	}
}

/// Cached, notifying query set for one entity.
///
/// List results are cached under `"{entity}?{query}"` and single items
/// under `"{entity}/{id}"`, all tagged with the entity name. Mutations
/// invalidate the tag, which covers both shapes at once.
pub struct EntityQueries<T, C, U, P = ListParams> {
	descriptor: EntityDescriptor<T>,
	endpoint: CrudEndpoint<T, C, U, P>,
	client: QueryClient,
}

impl<T, C, U, P> Clone for EntityQueries<T, C, U, P> {
	fn clone(&self) -> Self {
		Self {
			descriptor: self.descriptor,
			endpoint: self.endpoint.clone(),
			client: self.client.clone(),
		}
	}
}

impl<T, C, U, P> EntityQueries<T, C, U, P>
where
	T: Serialize + DeserializeOwned,
	C: Serialize,
	U: Serialize,
	P: ListQuery,
{
	pub fn new(
		descriptor: EntityDescriptor<T>,
		endpoint: CrudEndpoint<T, C, U, P>,
		client: QueryClient,
	) -> Self {
		Self {
			descriptor,
			endpoint,
			client,
		}
	}

	pub fn descriptor(&self) -> &EntityDescriptor<T> {
		&self.descriptor
	}

	pub fn endpoint(&self) -> &CrudEndpoint<T, C, U, P> {
		&self.endpoint
	}

	pub fn client(&self) -> &QueryClient {
		&self.client
	}

	fn list_key(&self, params: &P) -> String {
		let query = params.query_string();
		if query.is_empty() {
			self.descriptor.entity_name.to_string()
		} else {
			format!("{}?{}", self.descriptor.entity_name, query)
		}
	}

	fn item_key(&self, id: EntityId) -> String {
		format!("{}/{}", self.descriptor.entity_name, id)
	}

	/// Resource name as it appears in failure notifications.
	fn resource(&self) -> String {
		self.descriptor.display_name.singular.to_lowercase()
	}

	/// Fetches one page, serving from cache when possible.
	pub async fn list(&self, params: &P) -> Result<ListPage<T>> {
		let key = self.list_key(params);
		if let Some(page) = self.client.cache().get::<ListPage<T>>(&key).await? {
			return Ok(page);
		}
		self.fetch_list(params).await
	}

	/// Fetches one page from the backend and refreshes the cache entry.
	async fn fetch_list(&self, params: &P) -> Result<ListPage<T>> {
		let key = self.list_key(params);
		let page = self.endpoint.list(params).await?;
		self.client
			.cache()
			.set_with_tags(&key, &page, None, &[self.descriptor.entity_name])
			.await?;
		Ok(page)
	}

	/// Fetches one entity. `None` short-circuits without a request,
	/// mirroring a detail view that has no id yet.
	pub async fn get(&self, id: Option<EntityId>) -> Result<Option<T>> {
		let Some(id) = id else {
			return Ok(None);
		};

		let key = self.item_key(id);
		if let Some(item) = self.client.cache().get::<T>(&key).await? {
			return Ok(Some(item));
		}

		let item = self.endpoint.get(id).await?;
		self.client
			.cache()
			.set_with_tags(&key, &item, None, &[self.descriptor.entity_name])
			.await?;
		Ok(Some(item))
	}

	pub async fn create(&self, payload: &C) -> Result<T> {
		match self.endpoint.create(payload).await {
			Ok(created) => {
				self.invalidate().await;
				self.client.messages().success(format!(
					"{} «{}» opprettet",
					self.descriptor.display_name.singular,
					self.descriptor.label_of(&created)
				));
				Ok(created)
			}
			Err(e) => {
				self.client
					.messages()
					.error(crud_failure_message(CrudOp::Create, &self.resource(), &e));
				Err(e)
			}
		}
	}

	pub async fn update(&self, id: EntityId, payload: &U) -> Result<T> {
		match self.endpoint.update(id, payload).await {
			Ok(updated) => {
				self.invalidate().await;
				self.client.messages().success(format!(
					"{} «{}» oppdatert",
					self.descriptor.display_name.singular,
					self.descriptor.label_of(&updated)
				));
				Ok(updated)
			}
			Err(e) => {
				self.client
					.messages()
					.error(crud_failure_message(CrudOp::Update, &self.resource(), &e));
				Err(e)
			}
		}
	}

	pub async fn delete(&self, id: EntityId) -> Result<()> {
		match self.endpoint.delete(id).await {
			Ok(()) => {
				self.invalidate().await;
				self.client
					.messages()
					.success(format!("{} slettet", self.descriptor.display_name.singular));
				Ok(())
			}
			Err(e) => {
				self.client
					.messages()
					.error(crud_failure_message(CrudOp::Delete, &self.resource(), &e));
				Err(e)
			}
		}
	}

	/// Drops every cached entry for this entity, forcing the next read to
	/// hit the backend.
	pub async fn invalidate(&self) {
		let dropped = self
			.client
			.cache()
			.invalidate_tag(self.descriptor.entity_name)
			.await;
		tracing::debug!(
			"Invalidated {} cached entries for {}",
			dropped,
			self.descriptor.entity_name
		);
	}

	/// Spawns a task that pushes list states into a watch channel.
	///
	/// The first fetch may serve from cache; with `poll` set, later rounds
	/// bypass the cache read and refresh it from the backend. The task
	/// stops on its own once every receiver is dropped, or after the first
	/// fetch when `poll` is `None`.
	pub fn watch_list(
		&self,
		params: P,
		poll: Option<Duration>,
	) -> (watch::Receiver<QueryState<ListPage<T>>>, JoinHandle<()>)
	where
		T: Send + Sync + 'static,
		C: Send + Sync + 'static,
		U: Send + Sync + 'static,
		P: Send + Sync + 'static,
	{
		let (tx, rx) = watch::channel(QueryState::Loading);
		let queries = self.clone();

		let handle = tokio::spawn(async move {
			let mut first = true;
			loop {
				let result = if first {
					queries.list(&params).await
				} else {
					queries.fetch_list(&params).await
				};
				first = false;

				let state = match result {
					Ok(page) => QueryState::Ready(page),
					Err(e) => {
						tracing::warn!(
							"Failed to refresh {} list: {}",
							queries.descriptor.entity_name,
							e
						);
						QueryState::Failed(e)
					}
				};
				if tx.send(state).is_err() {
					break;
				}

				match poll {
					Some(interval) => tokio::time::sleep(interval).await,
					None => break,
				}
			}
		});

		(rx, handle)
	}
}
