//! Core HTTP client for the Qapla' REST API 1.1.
//!
//! The [`QaplaClient`] struct is the main entry point for interacting with the
//! Qapla' service. It wraps [`reqwest::Client`], appends the API key to every
//! request, and unwraps the action-keyed response envelope.
//!
//! API endpoint methods are added to `QaplaClient` via `impl` blocks in the
//! [`crate::api`] module; all of them funnel through
//! [`QaplaClient::perform_request`].

use std::fmt;
use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::constants::{API_BASE_URL, API_KEY_PARAM, ENV_API_KEY, ENV_BASE_URL};
use crate::error::{QaplaError, Result};
use crate::types::{Params, RequestMethod};

// ---------------------------------------------------------------------------
// API key
// ---------------------------------------------------------------------------

/// A Qapla' API key.
///
/// Debug and display output print `[redacted]`; call [`ApiKey::expose`] to get
/// the raw value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    /// Expose the raw key value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Settings used to construct a [`QaplaClient`].
///
/// Only `api_key` is required; [`QaplaClient::from_config`] fails with
/// [`QaplaError::Config`] when it is missing or empty.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// The account API key.
    pub api_key: Option<String>,
    /// Override for [`API_BASE_URL`] (e.g. a mock server).
    pub base_url: Option<String>,
    /// Total per-request timeout. No timeout when `None`.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a config with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Read `QAPLA_API_KEY` and `QAPLA_BASE_URL` from the environment.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(ENV_API_KEY).ok(),
            base_url: std::env::var(ENV_BASE_URL).ok(),
            timeout: None,
        }
    }

    /// Point the client at a custom base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the total per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Core HTTP client for the Qapla' REST API 1.1.
///
/// Every public method issues exactly one HTTP request and returns the value
/// found under the action key of the response envelope. Nothing is retried or
/// cached. The client is cheap to clone and safe to share across tasks.
///
/// # Example
///
/// ```no_run
/// use qapla_rs::client::QaplaClient;
/// use qapla_rs::types::TrackingType;
///
/// # #[tokio::main]
/// # async fn main() -> qapla_rs::error::Result<()> {
/// let client = QaplaClient::new("my secret api key")?;
/// let track = client
///     .get_shipping(TrackingType::OrderReference, "100004399", None)
///     .await?;
/// println!("{track}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QaplaClient {
    http: reqwest::Client,
    api_key: ApiKey,
    /// Base URL, always ending in `/`.
    base_url: String,
}

impl QaplaClient {
    /// Create a new `QaplaClient` with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Create a new `QaplaClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key).base_url(base_url))
    }

    /// Create a client from `QAPLA_API_KEY` (and optionally `QAPLA_BASE_URL`).
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env())
    }

    /// Create a client from a [`ClientConfig`].
    ///
    /// Fails with [`QaplaError::Config`] if the API key is missing or empty or
    /// the base URL is not an absolute `http(s)` URL. No network access happens
    /// here.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let api_key = match config.api_key {
            Some(key) if !key.trim().is_empty() => ApiKey(key),
            _ => {
                return Err(QaplaError::Config(
                    "an API key is required to create a Qapla' client".into(),
                ));
            }
        };

        let base_url = normalize_base_url(config.base_url.as_deref().unwrap_or(API_BASE_URL))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| QaplaError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Call `action` and return the value under the `action` key of the
    /// decoded response.
    ///
    /// The API key is added to `params` as `apiKey`, replacing any value the
    /// caller put there. `GET` sends `params` as a query string and `POST` as
    /// a JSON body; both send `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// - [`QaplaError::Http`] on network failure.
    /// - [`QaplaError::HttpStatus`] on a non-success status.
    /// - [`QaplaError::Json`] if the body is not JSON.
    /// - [`QaplaError::MissingActionKey`] if the decoded body has no `action` key.
    pub async fn perform_request(
        &self,
        action: &str,
        params: Params,
        method: RequestMethod,
    ) -> Result<Value> {
        self.request(action, params, method).await
    }

    /// Like [`perform_request`](Self::perform_request), but deserializes the
    /// unwrapped value into `R`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        action: &str,
        params: Params,
        method: RequestMethod,
    ) -> Result<R> {
        let req = self.build_request(action, params, method)?;
        tracing::debug!(%method, action, url = %self.endpoint(action), "sending request");

        let resp = self.http.execute(req).await.map_err(QaplaError::transport)?;
        let value = self.handle_response(action, resp).await?;
        serde_json::from_value(value).map_err(QaplaError::Json)
    }

    /// Build the request [`perform_request`](Self::perform_request) would send,
    /// without sending it.
    pub fn build_request(
        &self,
        action: &str,
        mut params: Params,
        method: RequestMethod,
    ) -> Result<reqwest::Request> {
        params.insert(
            API_KEY_PARAM.to_owned(),
            Value::String(self.api_key.expose().to_owned()),
        );

        let builder = match method {
            RequestMethod::Get => {
                let url = Url::parse(&format!(
                    "{}?{}",
                    self.endpoint(action),
                    encode_query(&params)
                ))?;
                self.http.request(method.to_reqwest(), url)
            }
            RequestMethod::Post => {
                let url = Url::parse(&format!("{}?", self.endpoint(action)))?;
                self.http.request(method.to_reqwest(), url).json(&params)
            }
        };

        builder
            .headers(Self::default_headers())
            .build()
            .map_err(QaplaError::transport)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Endpoint URL without the query string.
    fn endpoint(&self, action: &str) -> String {
        format!("{}{}/", self.base_url, action)
    }

    /// Headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Read a response, returning either the unwrapped action value or a
    /// `QaplaError`.
    async fn handle_response(&self, action: &str, resp: reqwest::Response) -> Result<Value> {
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(QaplaError::transport)?;
        tracing::debug!(%status, len = bytes.len(), action, "received response");

        if !status.is_success() {
            return Err(QaplaError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let envelope: Value = serde_json::from_slice(&bytes)?;
        unwrap_action(action, envelope)
    }
}

/// Take the value under `action` out of a decoded response envelope.
pub(crate) fn unwrap_action(action: &str, mut envelope: Value) -> Result<Value> {
    if let Some(value) = envelope.as_object_mut().and_then(|map| map.remove(action)) {
        return Ok(value);
    }
    tracing::warn!(action, "response envelope has no action key");
    Err(QaplaError::MissingActionKey {
        action: action.to_owned(),
        body: envelope,
    })
}

/// Validate a base URL and make sure it ends with `/`.
fn normalize_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)
        .map_err(|e| QaplaError::Config(format!("invalid base URL '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(QaplaError::Config(format!(
            "base URL must be an absolute http(s) URL, got '{raw}'"
        )));
    }
    let mut base = url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(base)
}

/// Flatten `params` into an `application/x-www-form-urlencoded` query string.
///
/// Nested objects and arrays use bracket notation (`rows[0][sku]=...`),
/// booleans become `1`/`0`, and nulls are skipped.
pub(crate) fn encode_query(params: &Params) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten_value(key.clone(), value, &mut pairs);
    }
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    ser.extend_pairs(pairs);
    ser.finish()
}

fn flatten_value(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((key, if *b { "1" } else { "0" }.to_owned())),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::String(s) => out.push((key, s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_value(format!("{key}[{i}]"), item, out);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                flatten_value(format!("{key}[{sub}]"), item, out);
            }
        }
    }
}
