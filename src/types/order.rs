#![allow(missing_docs)]
//! Order types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Push Order
// ---------------------------------------------------------------------------

/// Minimum fields for pushing a single order.
///
/// Used by `POST pushOrder`. Optional attributes (`amount`, `rows`,
/// `customerEmail`, ...) go in the extra attribute map passed alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub status: String,
    /// `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
    /// `YYYY-MM-DD HH:MM:SS`.
    pub updated_at: String,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_state: String,
    pub customer_zip: String,
    pub payment_type: String,
}
