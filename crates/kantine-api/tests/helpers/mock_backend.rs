//! In-process HTTP double for the backend the entity modules talk to.
//!
//! Stubs are keyed by method and path; registering the same pair again
//! replaces the previous response. Requests are recorded so tests can
//! assert the exact paths, query strings and bodies each module emits.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// How the backend behaves for requests without an explicit stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
	/// Serve stubbed routes normally.
	Success,
	/// Respond 500 with a plain message body.
	ServerError,
}

/// One request observed by the backend, captured for assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: String,
	pub path: String,
	pub query: Option<String>,
	pub body: String,
}

#[derive(Debug, Clone)]
struct Stub {
	method: Method,
	path: String,
	status: StatusCode,
	body: String,
}

struct BackendState {
	error_mode: ErrorMode,
	stubs: Vec<Stub>,
	requests: Vec<RecordedRequest>,
}

/// Minimal backend double with programmable routes and request recording.
pub struct MockBackend {
	state: Arc<Mutex<BackendState>>,
	local_addr: SocketAddr,
}

impl MockBackend {
	/// Starts the backend on an ephemeral localhost port.
	pub async fn start() -> Self {
		let state = Arc::new(Mutex::new(BackendState {
			error_mode: ErrorMode::Success,
			stubs: Vec::new(),
			requests: Vec::new(),
		}));

		let listener = TcpListener::bind("127.0.0.1:0")
			.await
			.expect("Failed to bind mock backend");
		let local_addr = listener.local_addr().expect("Failed to get local address");

		let server_state = Arc::clone(&state);
		tokio::spawn(async move {
			loop {
				let (stream, _) = match listener.accept().await {
					Ok(conn) => conn,
					Err(_) => break,
				};
				let io = TokioIo::new(stream);
				let state = Arc::clone(&server_state);

				tokio::spawn(async move {
					let service = service_fn(move |req| {
						let state = Arc::clone(&state);
						async move { handle_request(req, state).await }
					});

					let _ = http1::Builder::new().serve_connection(io, service).await;
				});
			}
		});

		// Give the accept loop a moment to come up.
		tokio::time::sleep(Duration::from_millis(100)).await;

		Self { state, local_addr }
	}

	/// Base URL of the backend, without a trailing slash.
	pub fn base_url(&self) -> String {
		format!("http://{}", self.local_addr)
	}

	pub fn set_error_mode(&self, mode: ErrorMode) {
		self.state.lock().unwrap().error_mode = mode;
	}

	/// Registers a canned response, replacing any stub for the same route.
	pub fn stub(&self, method: Method, path: &str, status: StatusCode, body: &str) {
		let mut guard = self.state.lock().unwrap();
		guard
			.stubs
			.retain(|s| !(s.method == method && s.path == path));
		guard.stubs.push(Stub {
			method,
			path: path.to_string(),
			status,
			body: body.to_string(),
		});
	}

	/// All requests observed so far, in arrival order.
	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.state.lock().unwrap().requests.clone()
	}

	/// Number of requests seen for a method and exact path.
	pub fn hits(&self, method: &str, path: &str) -> usize {
		self.state
			.lock()
			.unwrap()
			.requests
			.iter()
			.filter(|r| r.method == method && r.path == path)
			.count()
	}
}

async fn handle_request(
	req: Request<Incoming>,
	state: Arc<Mutex<BackendState>>,
) -> Result<Response<Full<Bytes>>, Infallible> {
	let method = req.method().clone();
	let path = req.uri().path().to_string();
	let query = req.uri().query().map(|q| q.to_string());

	let body_bytes = req
		.into_body()
		.collect()
		.await
		.map(|collected| collected.to_bytes())
		.unwrap_or_default();
	let body = String::from_utf8_lossy(&body_bytes).to_string();

	let error_mode = {
		let mut guard = state.lock().unwrap();
		guard.requests.push(RecordedRequest {
			method: method.to_string(),
			path: path.clone(),
			query,
			body,
		});
		guard.error_mode
	};

	if error_mode == ErrorMode::ServerError {
		return Ok(json_response(
			StatusCode::INTERNAL_SERVER_ERROR,
			r#"{"message": "Databasen svarer ikke"}"#,
		));
	}

	let stub = {
		let guard = state.lock().unwrap();
		guard
			.stubs
			.iter()
			.find(|s| s.method == method && s.path == path)
			.cloned()
	};

	match stub {
		Some(stub) => Ok(json_response(stub.status, &stub.body)),
		None => Ok(json_response(
			StatusCode::NOT_FOUND,
			r#"{"detail": "Not Found"}"#,
		)),
	}
}

fn json_response(status: StatusCode, body: &str) -> Response<Full<Bytes>> {
	Response::builder()
		.status(status)
		.header("content-type", "application/json")
		.body(Full::new(Bytes::from(body.to_string())))
		.expect("Failed to build response")
}
