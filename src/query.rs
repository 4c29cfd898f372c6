//! Query layer module.
//!
//! Cached reads, invalidating mutations, and the per-entity query sets.
//!
//! # Examples
//!
//! ```rust
//! use kantine::query::QueryClient;
//!
//! let query = QueryClient::new();
//! assert!(query.messages().drain().is_empty());
//! ```

pub use kantine_query::*;
