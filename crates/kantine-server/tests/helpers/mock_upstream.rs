//! In-process stand-in for the backend behind the health proxy.
//!
//! Stubs are keyed by method and path. `Hang` mode never answers, which
//! lets tests drive the proxy into its timeout branch.

use bytes::Bytes;
use http_body_util::Full;
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

/// How the upstream behaves for incoming requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamMode {
	/// Serve stubbed routes normally.
	Success,
	/// Respond 500 with a plain message body.
	ServerError,
	/// Accept the connection and never respond.
	Hang,
}

#[derive(Debug, Clone)]
struct Stub {
	method: Method,
	path: String,
	status: StatusCode,
	body: String,
}

struct UpstreamState {
	mode: UpstreamMode,
	stubs: Vec<Stub>,
	hits: Vec<(String, String)>,
}

/// Programmable upstream with request counting.
pub struct MockUpstream {
	state: Arc<Mutex<UpstreamState>>,
	local_addr: SocketAddr,
}

impl MockUpstream {
	/// Starts the upstream on an ephemeral localhost port.
	pub async fn start() -> Self {
		let state = Arc::new(Mutex::new(UpstreamState {
			mode: UpstreamMode::Success,
			stubs: Vec::new(),
			hits: Vec::new(),
		}));

		let listener = TcpListener::bind("127.0.0.1:0")
			.await
			.expect("Failed to bind mock upstream");
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

	/// Base URL of the upstream, without a trailing slash.
	pub fn base_url(&self) -> String {
		format!("http://{}", self.local_addr)
	}

	pub fn set_mode(&self, mode: UpstreamMode) {
		self.state.lock().unwrap().mode = mode;
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

	/// Requests observed as (method, path) pairs, in arrival order.
	pub fn requests(&self) -> Vec<(String, String)> {
		self.state.lock().unwrap().hits.clone()
	}
}

async fn handle_request(
	req: Request<Incoming>,
	state: Arc<Mutex<UpstreamState>>,
) -> Result<Response<Full<Bytes>>, Infallible> {
	let method = req.method().clone();
	let path = req.uri().path().to_string();

	let mode = {
		let mut guard = state.lock().unwrap();
		guard.hits.push((method.to_string(), path.clone()));
		guard.mode
	};

	match mode {
		UpstreamMode::Hang => {
			// Longer than any timeout a test configures.
			tokio::time::sleep(Duration::from_secs(60)).await;
			Ok(json_response(StatusCode::OK, "{}"))
		}
		UpstreamMode::ServerError => Ok(json_response(
			StatusCode::INTERNAL_SERVER_ERROR,
			r#"{"message": "Databasen svarer ikke"}"#,
		)),
		UpstreamMode::Success => {
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
	}
}

fn json_response(status: StatusCode, body: &str) -> Response<Full<Bytes>> {
	Response::builder()
		.status(status)
		.header("content-type", "application/json")
		.body(Full::new(Bytes::from(body.to_string())))
		.expect("Failed to build response")
}
