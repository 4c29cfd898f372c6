//! Shared contracts module.
//!
//! Entity identity and display naming, the canonical list query and page
//! envelope, the error taxonomy with its Norwegian message catalog, the
//! notification queue, and environment-backed settings.
//!
//! # Examples
//!
//! ```rust
//! use kantine::core::{ListParams, SortOrder};
//!
//! let params = ListParams::new().page(2).sort("navn", SortOrder::Asc);
//! ```

pub use kantine_core::*;
