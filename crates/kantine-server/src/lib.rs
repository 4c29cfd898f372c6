//! Local HTTP routes in front of the dashboard.
//!
//! Two routes only: `GET /api/health` proxies the backend's readiness
//! check with a hard timeout, and `POST /api/errors` receives client
//! error reports for server-side logging. Everything else is 404.

pub mod routes;
pub mod server;

pub use routes::AppState;
pub use server::{run, serve};
