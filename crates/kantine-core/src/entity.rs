//! Entity identity and naming contract.

/// Backend row identifier.
///
/// Every resource keys its rows with a numeric id; only the column name
/// varies (`kundeid`, `ansattid`, `menyperiodeid`, ...).
pub type EntityId = i64;

/// Singular/plural display names used in notifications and table chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayName {
	pub singular: &'static str,
	pub plural: &'static str,
}

impl DisplayName {
	pub const fn new(singular: &'static str, plural: &'static str) -> Self {
		Self { singular, plural }
	}
}

/// Static description of one entity type.
///
/// The generic layers never reach into entity fields; row identity, cache
/// tags and notification texts all go through this descriptor.
///
/// # Examples
///
/// ```
/// use kantine_core::entity::{DisplayName, EntityDescriptor};
///
/// struct Kunde {
/// 	kundeid: i64,
/// 	kundenavn: String,
/// }
///
/// let descriptor: EntityDescriptor<Kunde> = EntityDescriptor {
/// 	entity_name: "kunder",
/// 	display_name: DisplayName::new("Kunde", "Kunder"),
/// 	get_id: |k| k.kundeid,
/// 	get_label: |k| k.kundenavn.clone(),
/// };
///
/// let kunde = Kunde { kundeid: 7, kundenavn: "Ola Kafé".into() };
/// assert_eq!(descriptor.id_of(&kunde), 7);
/// assert_eq!(descriptor.label_of(&kunde), "Ola Kafé");
/// ```
pub struct EntityDescriptor<T> {
	/// Cache tag and query-key prefix, e.g. `"kunder"`.
	pub entity_name: &'static str,
	pub display_name: DisplayName,
	pub get_id: fn(&T) -> EntityId,
	pub get_label: fn(&T) -> String,
}

impl<T> EntityDescriptor<T> {
	pub fn id_of(&self, item: &T) -> EntityId {
		(self.get_id)(item)
	}

	pub fn label_of(&self, item: &T) -> String {
		(self.get_label)(item)
	}
}

// Manual impls keep `T` free of Clone/Copy bounds; fn pointers copy anyway.
impl<T> Clone for EntityDescriptor<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for EntityDescriptor<T> {}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Clone)]
	struct Vare {
		id: EntityId,
		navn: String,
	}

	fn descriptor() -> EntityDescriptor<Vare> {
		EntityDescriptor {
			entity_name: "varer",
			display_name: DisplayName::new("Vare", "Varer"),
			get_id: |v| v.id,
			get_label: |v| v.navn.clone(),
		}
	}

	#[test]
	fn test_descriptor_extractors() {
		let vare = Vare {
			id: 42,
			navn: "Brunost".to_string(),
		};

		let d = descriptor();
		assert_eq!(d.id_of(&vare), 42);
		assert_eq!(d.label_of(&vare), "Brunost");
		assert_eq!(d.display_name.singular, "Vare");
		assert_eq!(d.display_name.plural, "Varer");
	}

	#[test]
	fn test_descriptor_is_copy() {
		let d = descriptor();
		let copied = d;
		assert_eq!(copied.entity_name, d.entity_name);
	}
}
