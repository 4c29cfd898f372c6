//! Core contracts for the kantine data layer.
//!
//! Everything the generic layers agree on lives here: entity identity and
//! display naming, the canonical list-query and page envelope, the error
//! taxonomy with the Norwegian message catalog, the notification queue, and
//! environment-backed settings.

pub mod config;
pub mod entity;
pub mod exception;
pub mod messages;
pub mod params;

pub use config::{Env, EnvError, Settings};
pub use entity::{DisplayName, EntityDescriptor, EntityId};
pub use exception::{CrudOp, Error, ErrorKind, Result, crud_failure_message};
pub use messages::{Level, Message, MessageStore};
pub use params::{ListPage, ListParams, ListQuery, SortOrder};
