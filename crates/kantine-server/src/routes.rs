//! Route handlers: health proxy and error sink.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use kantine_client::{ApiClient, ErrorReport};
use kantine_core::{Error, Result, Settings};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

/// Hard limit on the outbound readiness call.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared route state: one pooled client against the backend.
pub struct AppState {
	backend: ApiClient,
}

impl AppState {
	pub fn new(backend_url: impl Into<String>) -> Result<Self> {
		Self::with_timeout(backend_url, HEALTH_TIMEOUT)
	}

	/// State with a custom outbound timeout. Production uses
	/// [`HEALTH_TIMEOUT`]; tests shorten it.
	pub fn with_timeout(backend_url: impl Into<String>, timeout: Duration) -> Result<Self> {
		let backend = ApiClient::builder()
			.base_url(backend_url)
			.timeout(timeout)
			.build()?;
		Ok(Self { backend })
	}

	pub fn from_settings(settings: &Settings) -> Result<Self> {
		Self::new(settings.api_base_url.clone())
	}
}

/// Dispatches one request to its route.
pub async fn handle(
	req: Request<Incoming>,
	state: Arc<AppState>,
) -> std::result::Result<Response<Full<Bytes>>, Infallible> {
	let method = req.method().clone();
	let path = req.uri().path().to_string();

	let response = match (method, path.as_str()) {
		(Method::GET, "/api/health") => health(&state).await,
		(Method::POST, "/api/errors") => report_error(req).await,
		_ => json_response(StatusCode::NOT_FOUND, r#"{"detail": "Not Found"}"#.to_string()),
	};

	Ok(response)
}

/// Forwards the backend's readiness check.
///
/// Upstream success passes the body through; upstream failure statuses
/// and unreachable backends both collapse into the dashboard's health
/// body shape so the status widget always has `status`, `message` and
/// `checks` to read.
async fn health(state: &AppState) -> Response<Full<Bytes>> {
	match state.backend.get::<serde_json::Value>("/health/ready").await {
		Ok(body) => json_response(StatusCode::OK, body.to_string()),
		Err(Error::Api { status, .. }) => {
			let status =
				StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
			json_response(status, health_error_body("Backend returnerte feilstatus"))
		}
		Err(e) => {
			tracing::warn!("Health check proxy failed: {}", e);
			let message = e.to_string();
			let message = if message.is_empty() {
				"Kunne ikke nå backend"
			} else {
				message.as_str()
			};
			json_response(StatusCode::SERVICE_UNAVAILABLE, health_error_body(message))
		}
	}
}

/// Receives a client error report, logs it, and answers 204.
async fn report_error(req: Request<Incoming>) -> Response<Full<Bytes>> {
	let body = match req.into_body().collect().await {
		Ok(collected) => collected.to_bytes(),
		Err(_) => {
			return json_response(
				StatusCode::BAD_REQUEST,
				health_error_body("Ugyldig feilrapport"),
			);
		}
	};

	match serde_json::from_slice::<ErrorReport>(&body) {
		Ok(report) => {
			tracing::error!(
				context = report.context.as_deref().unwrap_or("-"),
				url = report.url.as_deref().unwrap_or("-"),
				"Client error report: {}",
				report.message
			);
			Response::builder()
				.status(StatusCode::NO_CONTENT)
				.body(Full::new(Bytes::new()))
				.unwrap_or_else(|_| empty_fallback())
		}
		Err(e) => {
			tracing::warn!("Rejected malformed error report: {}", e);
			json_response(
				StatusCode::BAD_REQUEST,
				health_error_body("Ugyldig feilrapport"),
			)
		}
	}
}

fn health_error_body(message: &str) -> String {
	serde_json::json!({
		"status": "error",
		"message": message,
		"checks": {}
	})
	.to_string()
}

fn json_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
	Response::builder()
		.status(status)
		.header("content-type", "application/json")
		.body(Full::new(Bytes::from(body)))
		.unwrap_or_else(|_| empty_fallback())
}

fn empty_fallback() -> Response<Full<Bytes>> {
	let mut response = Response::new(Full::new(Bytes::new()));
	*response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
	response
}
