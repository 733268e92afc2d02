//! Error types for the `qapla-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, QaplaError>`.
//!
//! [`QaplaError`] covers:
//! - **Configuration errors** — Missing API key, bad base URL
//! - **Invalid arguments** — Unknown lookup type or date type
//! - **HTTP transport errors** — Network, TLS, timeout failures
//! - **HTTP status errors** — Non-success status codes with response body
//! - **Protocol errors** — Undecodable JSON or a response envelope without
//!   the expected action key

/// All possible errors produced by the `qapla-rs` client.
#[derive(Debug, thiserror::Error)]
pub enum QaplaError {
    /// The client could not be constructed from the given configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A network or transport-level error from `reqwest`.
    ///
    /// The request URL is stripped before wrapping, since GET URLs carry the
    /// API key in their query string.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The server returned a non-success HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// Failed to decode a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded response does not contain the requested action key.
    ///
    /// Qapla' answers some failures (e.g. a rejected API key) with an envelope
    /// that lacks the action key; the full decoded body is kept for inspection.
    #[error("response has no `{action}` key: {body}")]
    MissingActionKey {
        /// The action that was requested.
        action: String,
        /// The decoded response envelope.
        body: serde_json::Value,
    },

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl QaplaError {
    /// Wrap a `reqwest` error without the request URL it carries.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }

    /// Whether this error came from the transport layer (network failure or
    /// non-success status) rather than from the response content.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpStatus { .. })
    }

    /// Whether this error came from an unexpected response body.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Json(_) | Self::MissingActionKey { .. })
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QaplaError>;
