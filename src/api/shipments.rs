//! Shipment endpoints — getTrack, getTracks, pushTrack, deleteTrack.

use serde::Serialize;
use serde_json::Value;

use crate::client::QaplaClient;
use crate::constants::{DEFAULT_LANG, actions};
use crate::error::Result;
use crate::types::{
    DateType, Params, RequestMethod, Shipment, TrackingType, merge_attributes, to_payload,
};

impl QaplaClient {
    /// Get a shipment's status by tracking number or order reference.
    ///
    /// `lang` selects the language of the status descriptions and defaults to
    /// `ita`. It is passed through unvalidated.
    ///
    /// **Endpoint:** `GET getTrack`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use qapla_rs::client::QaplaClient;
    /// # use qapla_rs::types::TrackingType;
    /// # #[tokio::main]
    /// # async fn main() -> qapla_rs::error::Result<()> {
    /// let client = QaplaClient::new("my secret api key")?;
    /// let kind: TrackingType = "orderReference".parse()?;
    /// let track = client.get_shipping(kind, "100004399", Some("eng")).await?;
    /// println!("{}", track["status"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_shipping(
        &self,
        tracking_type: TrackingType,
        tracking: &str,
        lang: Option<&str>,
    ) -> Result<Value> {
        let params = shipping_params(tracking_type, tracking, lang);
        self.perform_request(actions::GET_TRACK, params, RequestMethod::Get)
            .await
    }

    /// Get shipments created since a date-time or within the last N days.
    ///
    /// `value` is a `YYYY-MM-DD HH:MM:SS` string for [`DateType::DateFrom`]
    /// (see [`format_date_from`](crate::types::format_date_from)) or a day
    /// count for [`DateType::Days`].
    ///
    /// **Endpoint:** `GET getTracks`
    pub async fn get_shipping_multiple(
        &self,
        date_type: DateType,
        value: impl Into<Value>,
    ) -> Result<Value> {
        let params = date_params(date_type, value.into());
        self.perform_request(actions::GET_TRACKS, params, RequestMethod::Get)
            .await
    }

    /// Push one shipment.
    ///
    /// `attributes` carries any optional pushTrack fields and is merged over
    /// the base fields, so it may also override them.
    ///
    /// **Endpoint:** `POST pushTrack`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use qapla_rs::client::QaplaClient;
    /// # use qapla_rs::types::Shipment;
    /// # #[tokio::main]
    /// # async fn main() -> qapla_rs::error::Result<()> {
    /// let client = QaplaClient::new("my secret api key")?;
    /// let shipment = Shipment::new("1Z0V5V416840696736", "UPS", "2014-08-02");
    /// let extra = serde_json::json!({ "reference": "ord. # 1674", "name": "Pepito Sbazzeguti" });
    /// let resp = client.push_shipping(&shipment, extra.as_object().cloned()).await?;
    /// println!("{resp}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn push_shipping(
        &self,
        shipment: &Shipment,
        attributes: Option<Params>,
    ) -> Result<Value> {
        let record = merge_attributes(shipment, attributes)?;
        let params = bulk_params(actions::PUSH_TRACK, Value::Object(record));
        self.perform_request(actions::PUSH_TRACK, params, RequestMethod::Post)
            .await
    }

    /// Push several shipments in one request.
    ///
    /// `shipments` is forwarded as-is under the `pushTrack` key; its shape is
    /// not checked.
    ///
    /// **Endpoint:** `POST pushTrack`
    pub async fn push_shipping_multiple<T: Serialize + ?Sized>(
        &self,
        shipments: &T,
    ) -> Result<Value> {
        let params = bulk_params(actions::PUSH_TRACK, to_payload(shipments)?);
        self.perform_request(actions::PUSH_TRACK, params, RequestMethod::Post)
            .await
    }

    /// Delete a shipment by tracking number.
    ///
    /// **Endpoint:** `POST deleteTrack`
    pub async fn delete_shipping(&self, tracking_number: &str) -> Result<Value> {
        let mut params = Params::new();
        params.insert("trackingNumber".into(), tracking_number.into());
        self.perform_request(actions::DELETE_TRACK, params, RequestMethod::Post)
            .await
    }
}

pub(crate) fn shipping_params(
    tracking_type: TrackingType,
    tracking: &str,
    lang: Option<&str>,
) -> Params {
    let mut params = Params::new();
    params.insert(tracking_type.as_str().into(), tracking.into());
    params.insert("lang".into(), lang.unwrap_or(DEFAULT_LANG).into());
    params
}

/// `{<dateType>: value}` for the bulk lookup endpoints.
pub(crate) fn date_params(date_type: DateType, value: Value) -> Params {
    let mut params = Params::new();
    params.insert(date_type.as_str().into(), value);
    params
}

/// Nest a payload under its action key, as the push endpoints expect.
pub(crate) fn bulk_params(action: &str, payload: Value) -> Params {
    let mut params = Params::new();
    params.insert(action.into(), payload);
    params
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn shipping_params_hold_exactly_one_identifier() {
        for kind in [TrackingType::TrackingNumber, TrackingType::OrderReference] {
            let params = shipping_params(kind, "100004399", None);
            assert_eq!(params.len(), 2);
            assert_eq!(params[kind.as_str()], "100004399");
            assert_eq!(params["lang"], "ita");
        }
    }

    #[test]
    fn shipping_params_pass_lang_through() {
        let params = shipping_params(TrackingType::TrackingNumber, "T1", Some("xx-nonsense"));
        assert_eq!(params["lang"], "xx-nonsense");
    }

    #[test]
    fn date_params_use_date_type_as_key() {
        assert_eq!(
            Value::Object(date_params(DateType::Days, json!(7))),
            json!({ "days": 7 })
        );
        assert_eq!(
            Value::Object(date_params(DateType::DateFrom, json!("2024-01-01 00:00:00"))),
            json!({ "dateFrom": "2024-01-01 00:00:00" })
        );
    }

    #[test]
    fn get_shipping_request_shape() {
        let client = QaplaClient::new("k").unwrap();
        let req = client
            .build_request(
                actions::GET_TRACK,
                shipping_params(TrackingType::OrderReference, "100004399", None),
                RequestMethod::Get,
            )
            .unwrap();
        let mut pairs: Vec<(String, String)> = req.url().query_pairs().into_owned().collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("apiKey".into(), "k".into()),
                ("lang".into(), "ita".into()),
                ("orderReference".into(), "100004399".into()),
            ]
        );
    }

    #[test]
    fn bulk_payload_is_forwarded_unchanged() {
        let payload = json!([
            { "trackingNumber": "123987299", "courier": "DHL", "shipDate": "2014-08-01" },
            { "anything": ["goes", 1, null] }
        ]);
        let params = bulk_params(actions::PUSH_TRACK, payload.clone());
        assert_eq!(params.len(), 1);
        assert_eq!(params["pushTrack"], payload);
    }
}
