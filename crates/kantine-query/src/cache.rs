//! Tagged in-memory cache for query results.
//!
//! Values are serialized to JSON bytes on insert, so the cache owns its
//! data and stays `Send + Sync` without cloning entity types. Every key
//! can carry tags; invalidating a tag drops all keys filed under it.

use kantine_core::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};
use tokio::sync::RwLock;

/// Cache entry with expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
	value: Vec<u8>,
	expires_at: Option<SystemTime>,
}

impl CacheEntry {
	fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
		let expires_at = ttl.map(|d| SystemTime::now() + d);
		Self { value, expires_at }
	}

	fn is_expired(&self) -> bool {
		if let Some(expires_at) = self.expires_at {
			SystemTime::now() > expires_at
		} else {
			false
		}
	}
}

#[derive(Default)]
struct TagIndex {
	// tag -> set of keys
	tag_to_keys: HashMap<String, HashSet<String>>,
	// key -> set of tags
	key_to_tags: HashMap<String, HashSet<String>>,
}

impl TagIndex {
	fn add(&mut self, key: &str, tags: &[&str]) {
		for tag in tags {
			self.tag_to_keys
				.entry(tag.to_string())
				.or_default()
				.insert(key.to_string());

			self.key_to_tags
				.entry(key.to_string())
				.or_default()
				.insert(tag.to_string());
		}
	}

	fn remove_key(&mut self, key: &str) {
		if let Some(tags) = self.key_to_tags.remove(key) {
			for tag in tags {
				if let Some(keys) = self.tag_to_keys.get_mut(&tag) {
					keys.remove(key);
					if keys.is_empty() {
						self.tag_to_keys.remove(&tag);
					}
				}
			}
		}
	}

	/// Removes a tag and returns the keys that were filed under it.
	fn take_tag(&mut self, tag: &str) -> Vec<String> {
		let keys: Vec<String> = match self.tag_to_keys.remove(tag) {
			Some(keys) => keys.into_iter().collect(),
			None => return Vec::new(),
		};
		for key in &keys {
			if let Some(tags) = self.key_to_tags.get_mut(key) {
				tags.remove(tag);
				if tags.is_empty() {
					self.key_to_tags.remove(key);
				}
			}
		}
		keys
	}
}

/// Counters and sizing snapshot for the cache.
#[derive(Debug, Clone, Default)]
pub struct CacheStatistics {
	pub hits: u64,
	pub misses: u64,
	pub total_requests: u64,
	pub entry_count: u64,
	pub memory_usage: u64,
}

impl CacheStatistics {
	/// Hit rate as a fraction between 0.0 and 1.0.
	pub fn hit_rate(&self) -> f64 {
		if self.total_requests == 0 {
			0.0
		} else {
			self.hits as f64 / self.total_requests as f64
		}
	}
}

/// Tagged in-memory query cache.
///
/// Cloning shares the underlying store; handles can live on both sides of
/// a spawn.
///
/// # Examples
///
/// ```
/// use kantine_query::QueryCache;
///
/// # async fn example() -> kantine_core::Result<()> {
/// let cache = QueryCache::new();
///
/// cache.set_with_tags("kunder?page=1", &vec!["a", "b"], None, &["kunder"]).await?;
/// cache.set_with_tags("kunder/1", &"a", None, &["kunder"]).await?;
///
/// cache.invalidate_tag("kunder").await;
///
/// let hit: Option<Vec<String>> = cache.get("kunder?page=1").await?;
/// assert_eq!(hit, None);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct QueryCache {
	store: Arc<RwLock<HashMap<String, CacheEntry>>>,
	tags: Arc<RwLock<TagIndex>>,
	default_ttl: Option<Duration>,
	hits: Arc<AtomicU64>,
	misses: Arc<AtomicU64>,
}

impl QueryCache {
	pub fn new() -> Self {
		Self {
			store: Arc::new(RwLock::new(HashMap::new())),
			tags: Arc::new(RwLock::new(TagIndex::default())),
			default_ttl: None,
			hits: Arc::new(AtomicU64::new(0)),
			misses: Arc::new(AtomicU64::new(0)),
		}
	}

	/// Sets a TTL applied to entries stored without an explicit one.
	pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
		self.default_ttl = Some(ttl);
		self
	}

	/// Reads a value. Expired entries count as misses.
	pub async fn get<T>(&self, key: &str) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		let store = self.store.read().await;

		if let Some(entry) = store.get(key) {
			if entry.is_expired() {
				self.misses.fetch_add(1, Ordering::Relaxed);
				return Ok(None);
			}

			self.hits.fetch_add(1, Ordering::Relaxed);

			let value = serde_json::from_slice(&entry.value)
				.map_err(|e| Error::Other(format!("cache deserialization failed: {}", e)))?;
			Ok(Some(value))
		} else {
			self.misses.fetch_add(1, Ordering::Relaxed);
			Ok(None)
		}
	}

	/// Stores a value without tags.
	pub async fn set<T>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<()>
	where
		T: Serialize,
	{
		self.set_with_tags(key, value, ttl, &[]).await
	}

	/// Stores a value and files the key under each tag.
	///
	/// Concurrent writers to the same key resolve last-write-wins; the tag
	/// index keeps the union of their tags until the key is dropped.
	pub async fn set_with_tags<T>(
		&self,
		key: &str,
		value: &T,
		ttl: Option<Duration>,
		tags: &[&str],
	) -> Result<()>
	where
		T: Serialize,
	{
		let serialized = serde_json::to_vec(value)
			.map_err(|e| Error::Other(format!("cache serialization failed: {}", e)))?;

		let ttl = ttl.or(self.default_ttl);
		let entry = CacheEntry::new(serialized, ttl);

		let mut store = self.store.write().await;
		store.insert(key.to_string(), entry);
		drop(store);

		if !tags.is_empty() {
			let mut index = self.tags.write().await;
			index.add(key, tags);
		}

		Ok(())
	}

	/// Removes one key and its tag-index entries.
	pub async fn remove(&self, key: &str) {
		let mut store = self.store.write().await;
		store.remove(key);
		drop(store);

		let mut index = self.tags.write().await;
		index.remove_key(key);
	}

	/// Drops every key filed under the tag. Returns how many were dropped.
	pub async fn invalidate_tag(&self, tag: &str) -> usize {
		let keys = {
			let mut index = self.tags.write().await;
			index.take_tag(tag)
		};

		if keys.is_empty() {
			return 0;
		}

		let mut store = self.store.write().await;
		for key in &keys {
			store.remove(key);
		}
		keys.len()
	}

	pub async fn has_key(&self, key: &str) -> bool {
		let store = self.store.read().await;
		match store.get(key) {
			Some(entry) => !entry.is_expired(),
			None => false,
		}
	}

	/// Drops everything, tags included. Counters keep their values.
	pub async fn clear(&self) {
		let mut store = self.store.write().await;
		store.clear();
		drop(store);

		let mut index = self.tags.write().await;
		*index = TagIndex::default();
	}

	/// Removes entries whose TTL has passed.
	pub async fn cleanup_expired(&self) {
		let expired: Vec<String> = {
			let store = self.store.read().await;
			store
				.iter()
				.filter(|(_, entry)| entry.is_expired())
				.map(|(key, _)| key.clone())
				.collect()
		};

		for key in &expired {
			self.remove(key).await;
		}
	}

	pub async fn statistics(&self) -> CacheStatistics {
		let store = self.store.read().await;
		let hits = self.hits.load(Ordering::Relaxed);
		let misses = self.misses.load(Ordering::Relaxed);
		let entry_count = store.len() as u64;
		let memory_usage = store
			.values()
			.map(|entry| entry.value.len() as u64)
			.sum::<u64>();

		CacheStatistics {
			hits,
			misses,
			total_requests: hits + misses,
			entry_count,
			memory_usage,
		}
	}
}

impl Default for QueryCache {
	fn default() -> Self {
		Self::new()
	}
}
