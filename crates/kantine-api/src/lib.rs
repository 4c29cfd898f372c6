//! Typed modules for every backend resource the dashboard manages.
//!
//! Each module pairs the wire types with their endpoint wiring: the entity
//! struct, create/update payloads, list parameters, the descriptor used for
//! cache tags and notifications, and constructors for the CRUD endpoint and
//! the cached query set. Pages pick a module and get the full generic stack
//! preconfigured for that resource.

pub mod ansatte;
pub mod kategorier;
pub mod kundegrupper;
pub mod kunder;
pub mod leverandorer;
pub mod ordre;
pub mod perioder;
pub mod retter;
pub mod stats;
