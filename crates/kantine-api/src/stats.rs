//! Dashboard counters behind `/v1/stats`.
//!
//! The dashboard never blanks on a stats failure: a failed refresh logs
//! and falls back to zero counts, and the poller keeps going.

use kantine_client::ApiClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const PATH: &str = "/v1/stats";

/// Refresh cadence used by the dashboard.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
	#[serde(default)]
	pub total_customers: u64,
	#[serde(default)]
	pub total_employees: u64,
	#[serde(default)]
	pub total_products: u64,
	#[serde(default)]
	pub total_orders: u64,
	#[serde(default)]
	pub total_menus: u64,
	#[serde(default)]
	pub total_recipes: u64,
}

#[derive(Debug, Clone)]
pub struct StatsApi {
	client: Arc<ApiClient>,
}

impl StatsApi {
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Fetches the counters, falling back to zeros on any failure.
	pub async fn fetch(&self) -> DashboardStats {
		match self.client.get::<DashboardStats>(PATH).await {
			Ok(stats) => stats,
			Err(e) => {
				tracing::warn!("Failed to fetch dashboard stats: {}", e);
				DashboardStats::default()
			}
		}
	}

	/// Spawns a poller pushing fresh counters into a watch channel every
	/// `interval`. The channel starts at zero counts; the task stops once
	/// every receiver is dropped.
	pub fn watch(&self, interval: Duration) -> (watch::Receiver<DashboardStats>, JoinHandle<()>) {
		let (tx, rx) = watch::channel(DashboardStats::default());
		let api = self.clone();

		let handle = tokio::spawn(async move {
			loop {
				let stats = api.fetch().await;
				if tx.send(stats).is_err() {
					break;
				}
				tokio::time::sleep(interval).await;
			}
		});

		(rx, handle)
	}
}
