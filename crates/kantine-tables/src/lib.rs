//! Headless list/table contract.
//!
//! Pages own a [`TableState`], hand its [`ListParams`] to the query layer,
//! and feed the fetched page back in. Every user interaction returns a
//! [`ParamsChange`] patch describing what the data layer should refetch
//! with; the crate renders nothing itself.
//!
//! [`ListParams`]: kantine_core::ListParams

pub mod actions;
pub mod column;
pub mod state;

pub use actions::{DeleteConfirmation, TableActions};
pub use column::{CellValue, Column};
pub use state::{
	DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, ParamsChange, SortIndicator, TableBody, TableState,
};
