//! Environment-backed settings.
//!
//! All data-layer configuration is read from `KANTINE_`-prefixed environment
//! variables with sensible defaults, so a development setup needs no
//! variables at all.

use std::env;
use std::time::Duration;

/// Environment variable reader with prefix support.
#[derive(Debug, Clone, Default)]
pub struct Env {
	prefix: Option<String>,
}

impl Env {
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix for all variable lookups.
	///
	/// # Examples
	///
	/// ```
	/// use kantine_core::config::Env;
	///
	/// let env = Env::new().with_prefix("KANTINE_");
	/// // Looks up KANTINE_API_URL, falls back to the default.
	/// let url = env.str_with_default("API_URL", Some("http://localhost:8000/api")).unwrap();
	/// assert!(!url.is_empty());
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	fn full_key(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a string value.
	pub fn str(&self, key: &str) -> Result<String, EnvError> {
		self.str_with_default(key, None)
	}

	/// Read a string value with a default.
	pub fn str_with_default(&self, key: &str, default: Option<&str>) -> Result<String, EnvError> {
		let full_key = self.full_key(key);
		match env::var(&full_key) {
			Ok(value) => Ok(value),
			Err(_) => match default {
				Some(d) => Ok(d.to_string()),
				None => Err(EnvError::MissingVariable(full_key)),
			},
		}
	}

	/// Read an integer value with a default.
	pub fn int_with_default(&self, key: &str, default: Option<i64>) -> Result<i64, EnvError> {
		let full_key = self.full_key(key);
		match env::var(&full_key) {
			Ok(value) => value.parse::<i64>().map_err(|e| EnvError::ParseError {
				key: full_key,
				error: e.to_string(),
			}),
			Err(_) => match default {
				Some(d) => Ok(d),
				None => Err(EnvError::MissingVariable(full_key)),
			},
		}
	}

	/// Read a boolean value with a default. Accepts `1/0`, `true/false`,
	/// `yes/no`, `on/off` in any case.
	pub fn bool_with_default(&self, key: &str, default: Option<bool>) -> Result<bool, EnvError> {
		let full_key = self.full_key(key);
		match env::var(&full_key) {
			Ok(value) => match value.to_lowercase().as_str() {
				"1" | "true" | "yes" | "on" => Ok(true),
				"0" | "false" | "no" | "off" => Ok(false),
				_ => Err(EnvError::ParseError {
					key: full_key,
					error: format!("not a boolean: {}", value),
				}),
			},
			Err(_) => match default {
				Some(d) => Ok(d),
				None => Err(EnvError::MissingVariable(full_key)),
			},
		}
	}
}

/// Environment variable errors.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
	#[error("Missing environment variable: {0}")]
	MissingVariable(String),

	#[error("Failed to parse environment variable '{key}': {error}")]
	ParseError { key: String, error: String },
}

/// Data-layer settings.
#[derive(Debug, Clone)]
pub struct Settings {
	/// Backend REST base URL, e.g. `http://localhost:8000/api`.
	pub api_base_url: String,
	/// Bind address for the local routes server.
	pub bind_addr: String,
	/// Path the error reporter posts to.
	pub error_sink_path: String,
	/// Default TTL for cached queries, in seconds. 0 disables expiry.
	pub cache_ttl_secs: u64,
}

impl Settings {
	pub const ENV_PREFIX: &'static str = "KANTINE_";

	/// Load settings from `KANTINE_`-prefixed environment variables.
	pub fn from_env() -> Result<Self, EnvError> {
		let env = Env::new().with_prefix(Self::ENV_PREFIX);
		let ttl = env.int_with_default("CACHE_TTL_SECS", Some(0))?;
		Ok(Self {
			api_base_url: env.str_with_default("API_URL", Some("http://localhost:8000/api"))?,
			bind_addr: env.str_with_default("BIND_ADDR", Some("127.0.0.1:3000"))?,
			error_sink_path: env.str_with_default("ERROR_SINK_PATH", Some("/api/errors"))?,
			cache_ttl_secs: u64::try_from(ttl).map_err(|_| EnvError::ParseError {
				key: format!("{}CACHE_TTL_SECS", Self::ENV_PREFIX),
				error: "must be non-negative".to_string(),
			})?,
		})
	}

	/// Cache TTL as a duration, `None` when expiry is disabled.
	pub fn cache_ttl(&self) -> Option<Duration> {
		if self.cache_ttl_secs == 0 {
			None
		} else {
			Some(Duration::from_secs(self.cache_ttl_secs))
		}
	}
}
