//! Local routes module: the health proxy and the error sink.

pub use kantine_server::*;
