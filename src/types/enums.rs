//! Shared enum types that map directly to Qapla' API string values.
//!
//! Each enum serializes to the exact parameter name the API expects, and
//! parses from it via [`FromStr`]. Parsing anything else yields
//! [`QaplaError::InvalidArgument`] so the call is rejected before a request
//! is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QaplaError;

// ---------------------------------------------------------------------------
// Tracking Type
// ---------------------------------------------------------------------------

/// Which identifier a shipment lookup uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackingType {
    /// Carrier-issued tracking number.
    TrackingNumber,
    /// Merchant-issued order reference.
    OrderReference,
}

impl TrackingType {
    /// The request parameter name for this lookup type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TrackingNumber => "trackingNumber",
            Self::OrderReference => "orderReference",
        }
    }
}

impl fmt::Display for TrackingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingType {
    type Err = QaplaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trackingNumber" => Ok(Self::TrackingNumber),
            "orderReference" => Ok(Self::OrderReference),
            other => Err(QaplaError::InvalidArgument(format!(
                "tracking type must be 'trackingNumber' or 'orderReference', got '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Date Type
// ---------------------------------------------------------------------------

/// How a bulk lookup (`getTracks`, `getOrders`) selects its time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateType {
    /// Everything since a date-time (`YYYY-MM-DD HH:MM:SS`).
    #[default]
    DateFrom,
    /// Everything within the last N days.
    Days,
}

impl DateType {
    /// The request parameter name for this date type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DateFrom => "dateFrom",
            Self::Days => "days",
        }
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateType {
    type Err = QaplaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dateFrom" => Ok(Self::DateFrom),
            "days" => Ok(Self::Days),
            other => Err(QaplaError::InvalidArgument(format!(
                "date type must be 'dateFrom' or 'days', got '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Request Method
// ---------------------------------------------------------------------------

/// HTTP verb used by [`perform_request`](crate::client::QaplaClient::perform_request).
///
/// `Get` encodes parameters in the query string, `Post` as a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
}

impl RequestMethod {
    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}
