//! Query cache and the entity query factory.
//!
//! This crate sits between the CRUD endpoints and the pages. Reads go
//! through a tagged in-memory cache; mutations invalidate every cached
//! entry for the entity and push a localized notification before they
//! return, so callers can chain their own follow-up on a resolved future
//! and still find the cache and message store already settled.

pub mod cache;
pub mod client;
pub mod entity;

pub use cache::{CacheStatistics, QueryCache};
pub use client::QueryClient;
pub use entity::{EntityQueries, QueryState};
