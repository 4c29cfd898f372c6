//! Row actions and the delete confirmation flow.

use kantine_core::EntityId;

/// Row-action configuration for one table.
///
/// Edit and delete are independently toggleable; routes are built from
/// the entity's base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableActions {
	base_path: String,
	pub enable_edit: bool,
	pub enable_delete: bool,
}

impl TableActions {
	pub fn new(base_path: impl Into<String>) -> Self {
		let base_path = base_path.into();
		Self {
			base_path: base_path
				.strip_suffix('/')
				.map(str::to_string)
				.unwrap_or(base_path),
			enable_edit: true,
			enable_delete: true,
		}
	}

	pub fn without_edit(mut self) -> Self {
		self.enable_edit = false;
		self
	}

	pub fn without_delete(mut self) -> Self {
		self.enable_delete = false;
		self
	}

	/// Route to the edit page for a row, `None` when editing is off.
	pub fn edit_route(&self, id: EntityId) -> Option<String> {
		if !self.enable_edit {
			return None;
		}
		Some(format!("{}/{}", self.base_path, id))
	}

	pub fn new_route(&self) -> String {
		format!("{}/new", self.base_path)
	}
}

/// Two-step delete: a row requests it, the dialog confirms or cancels.
///
/// # Examples
///
/// ```
/// use kantine_tables::DeleteConfirmation;
///
/// let mut dialog = DeleteConfirmation::new();
/// dialog.request(7);
/// assert!(dialog.is_open());
///
/// // Confirming hands back the id exactly once.
/// assert_eq!(dialog.confirm(), Some(7));
/// assert_eq!(dialog.confirm(), None);
/// assert!(!dialog.is_open());
/// ```
#[derive(Debug, Default)]
pub struct DeleteConfirmation {
	pending: Option<EntityId>,
}

impl DeleteConfirmation {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn request(&mut self, id: EntityId) {
		self.pending = Some(id);
	}

	pub fn pending(&self) -> Option<EntityId> {
		self.pending
	}

	pub fn is_open(&self) -> bool {
		self.pending.is_some()
	}

	/// Resolves the dialog, returning the id the caller should delete.
	pub fn confirm(&mut self) -> Option<EntityId> {
		self.pending.take()
	}

	pub fn cancel(&mut self) {
		self.pending = None;
	}
}
