//! Client-side error reporting.
//!
//! Failures worth surfacing to operations get posted to the local error-sink
//! route as JSON. Reporting must never cascade: a sink that is down or
//! rejecting is logged at warn level and otherwise ignored.

use chrono::{DateTime, Utc};
use kantine_core::Settings;
use kantine_core::exception::Error;
use serde::{Deserialize, Serialize};

/// Payload sent to the error sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
	pub timestamp: DateTime<Utc>,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub context: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_agent: Option<String>,
}

impl ErrorReport {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			timestamp: Utc::now(),
			message: message.into(),
			context: None,
			url: None,
			user_agent: None,
		}
	}

	pub fn with_context(mut self, context: impl Into<String>) -> Self {
		self.context = Some(context.into());
		self
	}

	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}
}

/// Fire-and-forget reporter posting to the error-sink route.
pub struct ErrorReporter {
	endpoint: String,
	http_client: reqwest::Client,
}

impl ErrorReporter {
	/// Create a reporter posting to the given absolute endpoint,
	/// e.g. `http://127.0.0.1:3000/api/errors`.
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			http_client: reqwest::Client::new(),
		}
	}

	/// Create a reporter targeting the local routes server from settings.
	pub fn from_settings(settings: &Settings) -> Self {
		Self::new(format!(
			"http://{}{}",
			settings.bind_addr, settings.error_sink_path
		))
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Deliver a report. Failures are swallowed after a warn log.
	pub async fn report(&self, report: &ErrorReport) {
		let result = self
			.http_client
			.post(&self.endpoint)
			.json(report)
			.send()
			.await;

		match result {
			Ok(response) if !response.status().is_success() => {
				tracing::warn!(
					"Error sink rejected report with status {}",
					response.status().as_u16()
				);
			}
			Ok(_) => {}
			Err(e) => {
				tracing::warn!("Failed to deliver error report: {}", e);
			}
		}
	}

	/// Log an error locally and forward it to the sink.
	pub async fn log_error(&self, error: &Error, context: Option<&str>) {
		match context {
			Some(context) => {
				tracing::error!(kind = error.kind().as_str(), "{}: {}", context, error)
			}
			None => tracing::error!(kind = error.kind().as_str(), "{}", error),
		}

		let mut report = ErrorReport::new(error.to_string());
		if let Some(context) = context {
			report = report.with_context(context);
		}
		self.report(&report).await;
	}
}
