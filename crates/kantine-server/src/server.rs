//! hyper accept loop for the local routes.

use crate::routes::{self, AppState};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use kantine_core::{Error, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Binds `addr` and serves until the process stops.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
	let listener = TcpListener::bind(addr)
		.await
		.map_err(|e| Error::Other(format!("kunne ikke binde {}: {}", addr, e)))?;
	tracing::info!("Server listening on http://{}", addr);
	run(listener, state).await
}

/// Accept loop over an already-bound listener.
///
/// Separate from [`serve`] so callers can bind port 0 and read the local
/// address back before serving.
pub async fn run(listener: TcpListener, state: Arc<AppState>) -> Result<()> {
	loop {
		let (stream, _) = listener
			.accept()
			.await
			.map_err(|e| Error::Other(format!("accept feilet: {}", e)))?;
		let io = TokioIo::new(stream);
		let state = Arc::clone(&state);

		tokio::task::spawn(async move {
			let service = service_fn(move |req| {
				let state = Arc::clone(&state);
				async move { routes::handle(req, state).await }
			});

			if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
				tracing::debug!("Error handling connection: {:?}", err);
			}
		});
	}
}
