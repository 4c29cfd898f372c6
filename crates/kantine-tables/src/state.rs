//! Table parameter state machine.

use kantine_core::{ListPage, ListParams, SortOrder};

/// Page sizes offered by the selector.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [10, 20, 50, 100];

pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Patch describing what changed, emitted toward the data layer.
///
/// Only the fields the interaction touched are set; the page reset that
/// rides along with search and page-size changes is part of the patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamsChange {
	pub page: Option<u64>,
	pub page_size: Option<u64>,
	pub search: Option<String>,
	pub sort_by: Option<String>,
	pub sort_order: Option<SortOrder>,
}

/// Header marker for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
	None,
	Ascending,
	Descending,
}

/// What the body area shows. The three states are mutually exclusive.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a, T> {
	Loading,
	Empty,
	Rows(&'a [T]),
}

impl<'a, T> TableBody<'a, T> {
	/// Loading wins over content; an empty fetched page shows the
	/// "no results" row.
	pub fn from_query(loading: bool, items: &'a [T]) -> Self {
		if loading {
			TableBody::Loading
		} else if items.is_empty() {
			TableBody::Empty
		} else {
			TableBody::Rows(items)
		}
	}
}

/// Pagination, search and sort state for one table.
///
/// Interactions mutate the state and return the [`ParamsChange`] the page
/// forwards to its query; fetched pages are fed back via [`sync_with`] so
/// the navigation guards track the backend's totals.
///
/// [`sync_with`]: TableState::sync_with
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
	page: u64,
	page_size: u64,
	search: String,
	sort_by: Option<String>,
	sort_order: SortOrder,
	total: u64,
	total_pages: u64,
}

impl TableState {
	pub fn new() -> Self {
		Self::with_page_size(DEFAULT_PAGE_SIZE)
	}

	pub fn with_page_size(page_size: u64) -> Self {
		Self {
			page: 1,
			page_size,
			search: String::new(),
			sort_by: None,
			sort_order: SortOrder::Asc,
			total: 0,
			total_pages: 1,
		}
	}

	pub fn page(&self) -> u64 {
		self.page
	}

	pub fn page_size(&self) -> u64 {
		self.page_size
	}

	pub fn search(&self) -> &str {
		&self.search
	}

	pub fn sort_by(&self) -> Option<&str> {
		self.sort_by.as_deref()
	}

	pub fn sort_order(&self) -> SortOrder {
		self.sort_order
	}

	pub fn total(&self) -> u64 {
		self.total
	}

	pub fn total_pages(&self) -> u64 {
		self.total_pages
	}

	/// Search always lands the user back on page 1.
	pub fn set_search(&mut self, text: impl Into<String>) -> ParamsChange {
		self.search = text.into();
		self.page = 1;
		ParamsChange {
			search: Some(self.search.clone()),
			page: Some(1),
			..Default::default()
		}
	}

	/// Page-size changes reset to page 1, mirroring search.
	pub fn set_page_size(&mut self, page_size: u64) -> ParamsChange {
		self.page_size = page_size;
		self.page = 1;
		ParamsChange {
			page_size: Some(page_size),
			page: Some(1),
			..Default::default()
		}
	}

	/// Clicking the active column flips its direction; any other column
	/// starts ascending.
	pub fn toggle_sort(&mut self, column: &str) -> ParamsChange {
		if self.sort_by.as_deref() == Some(column) {
			self.sort_order = self.sort_order.flipped();
		} else {
			self.sort_by = Some(column.to_string());
			self.sort_order = SortOrder::Asc;
		}
		ParamsChange {
			sort_by: self.sort_by.clone(),
			sort_order: Some(self.sort_order),
			..Default::default()
		}
	}

	pub fn sort_indicator(&self, column: &str) -> SortIndicator {
		if self.sort_by.as_deref() != Some(column) {
			return SortIndicator::None;
		}
		match self.sort_order {
			SortOrder::Asc => SortIndicator::Ascending,
			SortOrder::Desc => SortIndicator::Descending,
		}
	}

	pub fn can_go_prev(&self) -> bool {
		self.page > 1
	}

	pub fn can_go_next(&self) -> bool {
		self.page < self.total_pages
	}

	pub fn next_page(&mut self) -> Option<ParamsChange> {
		if !self.can_go_next() {
			return None;
		}
		self.page += 1;
		Some(ParamsChange {
			page: Some(self.page),
			..Default::default()
		})
	}

	pub fn prev_page(&mut self) -> Option<ParamsChange> {
		if !self.can_go_prev() {
			return None;
		}
		self.page -= 1;
		Some(ParamsChange {
			page: Some(self.page),
			..Default::default()
		})
	}

	/// Jumps to a page, clamped to what exists. `None` when nothing moves.
	pub fn go_to_page(&mut self, page: u64) -> Option<ParamsChange> {
		let clamped = page.clamp(1, self.total_pages.max(1));
		if clamped == self.page {
			return None;
		}
		self.page = clamped;
		Some(ParamsChange {
			page: Some(self.page),
			..Default::default()
		})
	}

	/// Adopts the totals of a fetched page. A shrunken result set pulls
	/// the current page back into range.
	pub fn sync_with<T>(&mut self, page: &ListPage<T>) {
		self.total = page.total;
		self.total_pages = page.total_pages.max(1);
		if self.page > self.total_pages {
			self.page = self.total_pages;
		}
	}

	/// 1-indexed row span shown as "viser X til Y av Z".
	pub fn visible_range(&self) -> (u64, u64) {
		if self.total == 0 {
			return (0, 0);
		}
		let start = (self.page - 1) * self.page_size + 1;
		let end = (self.page * self.page_size).min(self.total);
		(start, end)
	}

	pub fn to_list_params(&self) -> ListParams {
		let mut params = ListParams::new().page(self.page).page_size(self.page_size);
		if !self.search.is_empty() {
			params = params.search(self.search.clone());
		}
		if let Some(sort_by) = &self.sort_by {
			params = params.sort(sort_by.clone(), self.sort_order);
		}
		params
	}
}

impl Default for TableState {
	fn default() -> Self {
		Self::new()
	}
}
