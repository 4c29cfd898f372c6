//! REST client module.
//!
//! The pooled [`ApiClient`](crate::ApiClient) and the fire-and-forget
//! [`ErrorReporter`](crate::ErrorReporter).

pub use kantine_client::*;
