//! Shared handle over the query cache and the notification store.

use crate::cache::QueryCache;
use kantine_core::{MessageStore, Settings};
use std::sync::Arc;

/// One per application. Entity query sets clone this handle; the cache and
/// message store behind it are shared.
#[derive(Clone)]
pub struct QueryClient {
	cache: Arc<QueryCache>,
	messages: Arc<MessageStore>,
}

impl QueryClient {
	pub fn new() -> Self {
		Self {
			cache: Arc::new(QueryCache::new()),
			messages: Arc::new(MessageStore::new()),
		}
	}

	pub fn with_cache(cache: QueryCache) -> Self {
		Self {
			cache: Arc::new(cache),
			messages: Arc::new(MessageStore::new()),
		}
	}

	/// Applies the configured cache TTL, when one is set.
	pub fn from_settings(settings: &Settings) -> Self {
		let cache = match settings.cache_ttl() {
			Some(ttl) => QueryCache::new().with_default_ttl(ttl),
			None => QueryCache::new(),
		};
		Self::with_cache(cache)
	}

	pub fn cache(&self) -> &Arc<QueryCache> {
		&self.cache
	}

	pub fn messages(&self) -> &Arc<MessageStore> {
		&self.messages
	}
}

impl Default for QueryClient {
	fn default() -> Self {
		Self::new()
	}
}
