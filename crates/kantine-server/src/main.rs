use kantine_core::Settings;
use kantine_server::{AppState, serve};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "info".parse().unwrap()),
		)
		.init();

	let settings = Settings::from_env()?;
	let addr: SocketAddr = settings.bind_addr.parse()?;
	let state = Arc::new(AppState::from_settings(&settings)?);

	serve(addr, state).await?;
	Ok(())
}
