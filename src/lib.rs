//! # Kantine
//!
//! Headless data layer for the kantine catering administration dashboard.
//!
//! The dashboard's pages render elsewhere; this workspace owns everything
//! between them and the REST backend: a typed client, generic CRUD
//! endpoints, a tagged query cache with Norwegian user notifications, a
//! headless list/table contract, typed modules for every backend resource,
//! and the local health/error routes.
//!
//! ## Layering
//!
//! - [`core`] - shared contracts: entity identity, list queries, the error
//!   taxonomy and message catalog, notifications, settings
//! - [`client`] - the REST adapter; every transport failure is normalized
//!   here
//! - [`crud`] - one generic endpoint type covering all five operations
//! - [`query`] - cached reads, invalidating mutations, notifications
//! - [`tables`] - headless list/table state for the pages
//! - [`api`] - one typed module per backend resource
//! - [`server`] - local hyper routes: health proxy and error sink
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use kantine::api::kunder;
//! use kantine::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> kantine::Result<()> {
//! let client = Arc::new(ApiClient::new("http://localhost:8000/api")?);
//! let query = QueryClient::new();
//! let kunder = kunder::queries(Arc::clone(&client), query.clone());
//!
//! // Reads are cached per query key; mutations invalidate the entity's
//! // entries and push a notification onto `query.messages()`.
//! let page = kunder.list(&ListParams::new().page(1).page_size(20)).await?;
//! for kunde in &page.items {
//!     println!("{} ({})", kunde.kundenavn, kunde.kundeid);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod core;
pub mod crud;
pub mod query;
pub mod server;
pub mod tables;

// Re-export core contracts
pub use kantine_core::{
	CrudOp, DisplayName, EntityDescriptor, EntityId, Error, ErrorKind, ListPage, ListParams,
	ListQuery, Result, Settings, SortOrder, crud_failure_message,
};

// Re-export notifications
pub use kantine_core::{Level, Message, MessageStore};

// Re-export the REST adapter
pub use kantine_client::{ApiClient, ApiClientBuilder, ErrorReport, ErrorReporter};

// Re-export the CRUD endpoint
pub use kantine_crud::CrudEndpoint;

// Re-export the query layer
pub use kantine_query::{CacheStatistics, EntityQueries, QueryCache, QueryClient, QueryState};

// Re-export the table contract
pub use kantine_tables::{
	CellValue, Column, DeleteConfirmation, ParamsChange, SortIndicator, TableActions, TableState,
};

// Re-export common external dependencies
pub use serde::{Deserialize, Serialize};
pub use tokio;

pub mod prelude {
	// The types a page touches on every screen.
	pub use crate::{
		ApiClient,
		CellValue,
		Column,
		CrudEndpoint,
		EntityDescriptor,
		EntityId,
		EntityQueries,
		Error,
		ErrorKind,
		ListPage,
		ListParams,
		ListQuery,
		Message,
		MessageStore,
		ParamsChange,
		QueryClient,
		Result,
		SortOrder,
		TableActions,
		TableState,
	};

	// External
	pub use serde::{Deserialize, Serialize};
}
