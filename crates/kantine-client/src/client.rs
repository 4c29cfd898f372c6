//! Typed HTTP client over one pooled reqwest connection.

use kantine_core::config::Settings;
use kantine_core::exception::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Builder for creating an [`ApiClient`] with custom configuration.
///
/// # Examples
///
/// ```no_run
/// use kantine_client::ApiClientBuilder;
/// use std::time::Duration;
///
/// let client = ApiClientBuilder::new()
/// 	.base_url("http://localhost:8000/api")
/// 	.timeout(Duration::from_secs(30))
/// 	.build()
/// 	.unwrap();
/// ```
pub struct ApiClientBuilder {
	base_url: String,
	bearer_token: Option<String>,
	timeout: Option<Duration>,
}

impl ApiClientBuilder {
	pub fn new() -> Self {
		Self {
			base_url: "http://localhost:8000/api".to_string(),
			bearer_token: None,
			timeout: None,
		}
	}

	/// Set the backend base URL. A trailing slash is stripped so paths can
	/// always start with `/`.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		let url = url.into();
		self.base_url = url.strip_suffix('/').map(str::to_string).unwrap_or(url);
		self
	}

	/// Attach a bearer token to every request.
	pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
		self.bearer_token = Some(token.into());
		self
	}

	/// Set the request timeout.
	pub fn timeout(mut self, duration: Duration) -> Self {
		self.timeout = Some(duration);
		self
	}

	pub fn build(self) -> Result<ApiClient> {
		let mut builder = reqwest::Client::builder();
		if let Some(timeout) = self.timeout {
			builder = builder.timeout(timeout);
		}
		let http_client = builder.build().map_err(|e| Error::Config(e.to_string()))?;

		Ok(ApiClient {
			base_url: self.base_url,
			bearer_token: self.bearer_token,
			http_client,
		})
	}
}

impl Default for ApiClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// REST client for the kantine backend.
///
/// Every call resolves or fails exactly once; there is no retry logic.
#[derive(Debug)]
pub struct ApiClient {
	base_url: String,
	bearer_token: Option<String>,
	http_client: reqwest::Client,
}

impl ApiClient {
	/// Create a client with the given base URL and default configuration.
	pub fn new(base_url: impl Into<String>) -> Result<Self> {
		ApiClientBuilder::new().base_url(base_url).build()
	}

	/// Create a client from settings.
	pub fn from_settings(settings: &Settings) -> Result<Self> {
		ApiClientBuilder::new()
			.base_url(settings.api_base_url.clone())
			.build()
	}

	pub fn builder() -> ApiClientBuilder {
		ApiClientBuilder::new()
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn url(&self, path: &str) -> String {
		if path.starts_with("http://") || path.starts_with("https://") {
			path.to_string()
		} else {
			format!("{}{}", self.base_url, path)
		}
	}

	/// GET a JSON resource.
	pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		let response = self.send(self.http_client.get(self.url(path))).await?;
		Self::decode(response).await
	}

	/// GET a JSON resource with an already-encoded query string.
	pub async fn get_with_query<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T> {
		if query.is_empty() {
			return self.get(path).await;
		}
		let separator = if path.contains('?') { '&' } else { '?' };
		self.get(&format!("{}{}{}", path, separator, query)).await
	}

	/// POST a JSON body, decoding the JSON response.
	pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
	where
		T: DeserializeOwned,
		B: Serialize + ?Sized,
	{
		let response = self
			.send(self.http_client.post(self.url(path)).json(body))
			.await?;
		Self::decode(response).await
	}

	/// PUT a JSON body, decoding the JSON response.
	pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
	where
		T: DeserializeOwned,
		B: Serialize + ?Sized,
	{
		let response = self
			.send(self.http_client.put(self.url(path)).json(body))
			.await?;
		Self::decode(response).await
	}

	/// DELETE a resource, discarding any response body.
	pub async fn delete(&self, path: &str) -> Result<()> {
		self.send(self.http_client.delete(self.url(path))).await?;
		Ok(())
	}

	async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
		let request = match &self.bearer_token {
			Some(token) => request.bearer_auth(token),
			None => request,
		};

		let response = request
			.send()
			.await
			.map_err(|e| Error::Network(e.to_string()))?;
		Self::check_status(response).await
	}

	/// Turn a non-2xx response into `Error::Api`, lifting `message` and
	/// `detail` out of a JSON error body when the backend sent one.
	async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}

		let body: Option<Value> = response.json().await.ok();
		Err(Error::Api {
			status: status.as_u16(),
			message: body_field(&body, "message"),
			detail: body_field(&body, "detail"),
		})
	}

	async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
		response.json().await.map_err(|e| Error::Decode(e.to_string()))
	}
}

fn body_field(body: &Option<Value>, name: &str) -> Option<String> {
	let value = body.as_ref()?.get(name)?;
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Null => None,
		// FastAPI-style backends put validation arrays under `detail`.
		other => Some(other.to_string()),
	}
}
