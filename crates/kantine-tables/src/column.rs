//! Column descriptors and cell values.
//!
//! Columns reach into rows through a typed accessor rather than a string
//! field lookup, so a column over `Kunde` cannot be attached to an
//! `Ansatt` table by accident.

use std::fmt;

/// One table cell, already pulled out of the row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
	Text(String),
	Integer(i64),
	Float(f64),
	Bool(bool),
	/// Absent optional field.
	Missing,
}

impl fmt::Display for CellValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CellValue::Text(s) => f.write_str(s),
			CellValue::Integer(n) => write!(f, "{}", n),
			CellValue::Float(x) => write!(f, "{:.2}", x),
			CellValue::Bool(true) => f.write_str("Ja"),
			CellValue::Bool(false) => f.write_str("Nei"),
			CellValue::Missing => f.write_str("-"),
		}
	}
}

impl From<String> for CellValue {
	fn from(s: String) -> Self {
		CellValue::Text(s)
	}
}

impl From<&str> for CellValue {
	fn from(s: &str) -> Self {
		CellValue::Text(s.to_string())
	}
}

impl From<i64> for CellValue {
	fn from(n: i64) -> Self {
		CellValue::Integer(n)
	}
}

impl From<f64> for CellValue {
	fn from(x: f64) -> Self {
		CellValue::Float(x)
	}
}

impl From<bool> for CellValue {
	fn from(b: bool) -> Self {
		CellValue::Bool(b)
	}
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => v.into(),
			None => CellValue::Missing,
		}
	}
}

/// One column of a table.
///
/// `key` is what sort params carry on the wire, `label` is the header
/// text, and the accessor produces the cell for a row.
///
/// # Examples
///
/// ```
/// use kantine_tables::Column;
///
/// struct Kunde {
/// 	kundenavn: String,
/// 	antall_ansatte: Option<i64>,
/// }
///
/// let navn: Column<Kunde> =
/// 	Column::new("kundenavn", "Kundenavn", |k: &Kunde| k.kundenavn.clone().into()).sortable();
/// let ansatte: Column<Kunde> =
/// 	Column::new("antall_ansatte", "Ansatte", |k| k.antall_ansatte.into());
///
/// let kunde = Kunde { kundenavn: "Kafé Storhus".into(), antall_ansatte: None };
/// assert_eq!(navn.render(&kunde), "Kafé Storhus");
/// assert_eq!(ansatte.render(&kunde), "-");
/// assert!(navn.sortable);
/// ```
pub struct Column<T> {
	pub key: &'static str,
	pub label: &'static str,
	pub sortable: bool,
	pub accessor: fn(&T) -> CellValue,
}

impl<T> Column<T> {
	pub fn new(key: &'static str, label: &'static str, accessor: fn(&T) -> CellValue) -> Self {
		Self {
			key,
			label,
			sortable: false,
			accessor,
		}
	}

	pub fn sortable(mut self) -> Self {
		self.sortable = true;
		self
	}

	pub fn value_of(&self, row: &T) -> CellValue {
		(self.accessor)(row)
	}

	/// Plain-text rendering of the cell.
	pub fn render(&self, row: &T) -> String {
		self.value_of(row).to_string()
	}
}

// Manual impls keep `T` free of Clone/Copy bounds; fn pointers copy anyway.
impl<T> Clone for Column<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Column<T> {}
