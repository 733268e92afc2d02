//! Request types for the Qapla' REST API 1.1.
//!
//! The API is schema-free beyond a handful of required fields, so requests are
//! built as [`Params`] maps. Typed structs cover the required fields of the
//! single-record push endpoints; everything else travels as extra attributes
//! merged on top of them.
//!
//! ## Organization
//!
//! - [`enums`] — Lookup type, date type, and HTTP verb enumerations
//! - [`shipment`] — Base fields for `pushTrack`
//! - [`order`] — Base fields for `pushOrder`
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod enums;
pub mod order;
pub mod shipment;

pub use enums::*;
pub use order::Order;
pub use shipment::Shipment;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{QaplaError, Result};

/// Request parameters: string keys to arbitrary JSON values, in insertion order.
pub type Params = Map<String, Value>;

/// Serialize a caller-supplied payload.
///
/// Failures are reported as [`QaplaError::InvalidArgument`]: nothing has been
/// sent yet, so they are not protocol errors.
pub fn to_payload<T: Serialize + ?Sized>(payload: &T) -> Result<Value> {
    serde_json::to_value(payload)
        .map_err(|e| QaplaError::InvalidArgument(format!("payload cannot be serialized: {e}")))
}

/// Serialize `base` to a map and merge `extra` on top of it.
///
/// Keys present in both take the value from `extra`.
pub fn merge_attributes<T: Serialize>(base: &T, extra: Option<Params>) -> Result<Params> {
    let mut merged = match to_payload(base)? {
        Value::Object(map) => map,
        other => {
            return Err(QaplaError::InvalidArgument(format!(
                "base record must serialize to an object, got {other}"
            )));
        }
    };
    if let Some(extra) = extra {
        merged.extend(extra);
    }
    Ok(merged)
}

/// Format a date-time the way `dateFrom` expects it (`YYYY-MM-DD HH:MM:SS`).
pub fn format_date_from(dt: chrono::NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a date the way `shipDate` expects it (`YYYY-MM-DD`).
pub fn format_ship_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extra_attributes_override_base_fields() {
        let base = Shipment::new("T1", "DHL", "2024-01-01");
        let extra = json!({ "courier": "FEDEX", "reference": "ord. # 1674" });
        let merged = merge_attributes(&base, extra.as_object().cloned()).unwrap();

        assert_eq!(merged["courier"], "FEDEX");
        assert_eq!(merged["trackingNumber"], "T1");
        assert_eq!(merged["shipDate"], "2024-01-01");
        assert_eq!(merged["reference"], "ord. # 1674");
    }

    #[test]
    fn merge_without_extra_keeps_base_order() {
        let base = Shipment::new("T1", "DHL", "2024-01-01");
        let merged = merge_attributes(&base, None).unwrap();
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, ["trackingNumber", "courier", "shipDate"]);
    }

    #[test]
    fn merge_rejects_non_object_base() {
        let err = merge_attributes(&"plain string", None).unwrap_err();
        assert!(matches!(err, QaplaError::InvalidArgument(_)));
    }

    #[test]
    fn unserializable_payload_is_an_invalid_argument() {
        let mut payload = std::collections::HashMap::new();
        payload.insert((1u8, 2u8), "tuple keys are not JSON object keys");
        let err = to_payload(&payload).unwrap_err();
        assert!(matches!(err, QaplaError::InvalidArgument(_)));
        assert!(!err.is_protocol());
    }

    #[test]
    fn date_from_format() {
        let dt = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        assert_eq!(format_date_from(dt), "2024-03-09 07:05:00");
    }
}
