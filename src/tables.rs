//! Table contract module.
//!
//! Headless list/table state. Pages feed fetched pages in and get
//! [`ParamsChange`](crate::ParamsChange) patches back for every
//! interaction.
//!
//! # Examples
//!
//! ```rust
//! use kantine::tables::TableState;
//!
//! let mut state = TableState::new();
//! let change = state.set_search("kafé");
//! assert_eq!(change.page, Some(1));
//! ```

pub use kantine_tables::*;
