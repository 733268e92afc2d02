//! Constants for the Qapla' REST API 1.1.
//!
//! Contains the base URL, action names, and configuration defaults. These are
//! used internally by [`QaplaClient`](crate::client::QaplaClient) but are also
//! exported for callers driving [`perform_request`](crate::client::QaplaClient::perform_request)
//! directly.

// ---------------------------------------------------------------------------
// Base URL
// ---------------------------------------------------------------------------

/// Base URL for the Qapla' REST API, including the version segment.
pub const API_BASE_URL: &str = "https://api.qapla.it/1.1/";

/// API version targeted by this crate.
pub const API_VERSION: &str = "1.1";

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Language used for tracking results when the caller does not pick one.
pub const DEFAULT_LANG: &str = "ita";

/// Name of the request parameter carrying the API key.
pub const API_KEY_PARAM: &str = "apiKey";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable read by [`QaplaClient::from_env`](crate::client::QaplaClient::from_env)
/// for the API key.
pub const ENV_API_KEY: &str = "QAPLA_API_KEY";

/// Optional environment variable overriding [`API_BASE_URL`].
pub const ENV_BASE_URL: &str = "QAPLA_BASE_URL";

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Remote action names.
///
/// Each one is both the URL path segment and the top-level key of the
/// response envelope.
pub mod actions {
    /// Single shipment lookup.
    pub const GET_TRACK: &str = "getTrack";
    /// Shipments created since a date or within the last N days.
    pub const GET_TRACKS: &str = "getTracks";
    /// Push one or more shipments.
    pub const PUSH_TRACK: &str = "pushTrack";
    /// Delete a shipment by tracking number.
    pub const DELETE_TRACK: &str = "deleteTrack";
    /// Push one or more orders.
    pub const PUSH_ORDER: &str = "pushOrder";
    /// Orders created since a date or within the last N days.
    pub const GET_ORDERS: &str = "getOrders";
    /// Courier catalog.
    pub const GET_COURIERS: &str = "getCouriers";
    /// Premium credit balance.
    pub const GET_CREDITS: &str = "getCredits";
}
