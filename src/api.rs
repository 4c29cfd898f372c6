//! Entity modules.
//!
//! One typed module per backend resource: `kunder`, `ansatte`,
//! `kategorier`, `kundegrupper`, `perioder`, `leverandorer`, `retter`,
//! `ordre` and `stats`.

pub use kantine_api::*;
