//! List query parameters and the canonical page envelope.
//!
//! Backends answer list requests in two shapes, a full envelope and a bare
//! array. The adapter layer normalizes both into [`ListPage`] before anything
//! else sees them, so the rest of the workspace deals with exactly one list
//! contract.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
	#[default]
	Asc,
	Desc,
}

impl SortOrder {
	pub fn as_str(&self) -> &'static str {
		match self {
			SortOrder::Asc => "asc",
			SortOrder::Desc => "desc",
		}
	}

	/// The opposite direction.
	pub fn flipped(&self) -> Self {
		match self {
			SortOrder::Asc => SortOrder::Desc,
			SortOrder::Desc => SortOrder::Asc,
		}
	}
}

/// Conversion of typed parameters into URL query pairs.
///
/// Pair order must be deterministic: the encoded form doubles as a cache-key
/// component, and equal parameters have to produce equal keys.
pub trait ListQuery {
	fn query_pairs(&self) -> Vec<(String, String)>;

	/// Pairs encoded as a query string, without the leading `?`.
	fn query_string(&self) -> String {
		let pairs = self.query_pairs();
		if pairs.is_empty() {
			return String::new();
		}
		let mut encoded = form_urlencoded::Serializer::new(String::new());
		for (key, value) in &pairs {
			encoded.append_pair(key, value);
		}
		encoded.finish()
	}
}

/// Common parameters shared by every paged list endpoint.
///
/// Entity modules embed this and add their own filter fields. Endpoints that
/// speak offset style (`skip`/`limit`) do the page conversion inside their
/// own params type; this struct stays page-based.
///
/// # Examples
///
/// ```
/// use kantine_core::params::{ListParams, ListQuery, SortOrder};
///
/// let params = ListParams::new()
/// 	.page(2)
/// 	.page_size(20)
/// 	.search("kafé")
/// 	.sort("kundenavn", SortOrder::Desc);
///
/// assert_eq!(
/// 	params.query_string(),
/// 	"page=2&page_size=20&search=kaf%C3%A9&sort_by=kundenavn&sort_order=desc"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListParams {
	pub page: Option<u64>,
	pub page_size: Option<u64>,
	pub search: Option<String>,
	pub sort_by: Option<String>,
	pub sort_order: Option<SortOrder>,
}

impl ListParams {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn page(mut self, page: u64) -> Self {
		self.page = Some(page);
		self
	}

	pub fn page_size(mut self, page_size: u64) -> Self {
		self.page_size = Some(page_size);
		self
	}

	pub fn search(mut self, search: impl Into<String>) -> Self {
		self.search = Some(search.into());
		self
	}

	pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
		self.sort_by = Some(field.into());
		self.sort_order = Some(order);
		self
	}
}

impl ListQuery for ListParams {
	fn query_pairs(&self) -> Vec<(String, String)> {
		let mut pairs = Vec::new();
		if let Some(page) = self.page {
			pairs.push(("page".to_string(), page.to_string()));
		}
		if let Some(page_size) = self.page_size {
			pairs.push(("page_size".to_string(), page_size.to_string()));
		}
		if let Some(search) = &self.search {
			pairs.push(("search".to_string(), search.clone()));
		}
		if let Some(sort_by) = &self.sort_by {
			pairs.push(("sort_by".to_string(), sort_by.clone()));
		}
		if let Some(sort_order) = self.sort_order {
			pairs.push(("sort_order".to_string(), sort_order.as_str().to_string()));
		}
		pairs
	}
}

/// Canonical page envelope for list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
	pub items: Vec<T>,
	pub total: u64,
	pub page: u64,
	pub page_size: u64,
	pub total_pages: u64,
}

impl<T> ListPage<T> {
	/// Build the envelope for an endpoint that answered with a bare array.
	///
	/// The whole result counts as one page; `page_size` floors at 1 so the
	/// pagination math stays defined for empty results.
	pub fn from_items(items: Vec<T>) -> Self {
		let total = items.len() as u64;
		Self {
			items,
			total,
			page: 1,
			page_size: total.max(1),
			total_pages: 1,
		}
	}

	/// Pages needed for `total` rows at `page_size` rows per page, never 0.
	///
	/// # Examples
	///
	/// ```
	/// use kantine_core::params::ListPage;
	///
	/// assert_eq!(ListPage::<()>::page_count(38, 20), 2);
	/// assert_eq!(ListPage::<()>::page_count(40, 20), 2);
	/// assert_eq!(ListPage::<()>::page_count(41, 20), 3);
	/// assert_eq!(ListPage::<()>::page_count(0, 20), 1);
	/// ```
	pub fn page_count(total: u64, page_size: u64) -> u64 {
		if total == 0 {
			1
		} else {
			total.div_ceil(page_size.max(1))
		}
	}

	/// Map the item type, keeping the page metadata.
	pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListPage<U> {
		ListPage {
			items: self.items.into_iter().map(f).collect(),
			total: self.total,
			page: self.page,
			page_size: self.page_size,
			total_pages: self.total_pages,
		}
	}
}
