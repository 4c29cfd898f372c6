//! Typed CRUD endpoints over the REST client.
//!
//! Every admin resource shares the same five operations. [`CrudEndpoint`]
//! implements them once against a resource path; the entity crates only
//! supply types and the path.

pub mod endpoint;

pub use endpoint::CrudEndpoint;
