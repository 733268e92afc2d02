//! Shipment (track) types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Push Track
// ---------------------------------------------------------------------------

/// Minimum fields for pushing a single shipment.
///
/// Used by `POST pushTrack`. Every other attribute the API accepts
/// (`reference`, `orderDate`, `name`, `email`, ...) goes in the extra
/// attribute map passed alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Courier code as listed by `getCouriers` (e.g. `"DHL"`).
    pub courier: String,
    /// Shipping date, `YYYY-MM-DD`.
    pub ship_date: String,
}

impl Shipment {
    /// Create a shipment from its three required fields.
    pub fn new(
        tracking_number: impl Into<String>,
        courier: impl Into<String>,
        ship_date: impl Into<String>,
    ) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            courier: courier.into(),
            ship_date: ship_date.into(),
        }
    }

    /// Build a shipment from a typed ship date.
    pub fn with_date(
        tracking_number: impl Into<String>,
        courier: impl Into<String>,
        ship_date: chrono::NaiveDate,
    ) -> Self {
        Self::new(tracking_number, courier, super::format_ship_date(ship_date))
    }
}
