//! REST client adapter for the kantine backend.
//!
//! One pooled [`ApiClient`] carries every request the data layer makes.
//! Failures are normalized into the `kantine-core` error taxonomy at this
//! boundary: transport failures become `Error::Network`, non-2xx responses
//! become `Error::Api` with the body's `message`/`detail` fields lifted out,
//! and undecodable success bodies become `Error::Decode`.

pub mod client;
pub mod report;

pub use client::{ApiClient, ApiClientBuilder};
pub use report::{ErrorReport, ErrorReporter};
