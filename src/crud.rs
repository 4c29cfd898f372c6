//! Generic CRUD endpoints module.

pub use kantine_crud::*;
