//! Order endpoints — pushOrder, getOrders.

use serde::Serialize;
use serde_json::Value;

use crate::api::shipments::{bulk_params, date_params};
use crate::client::QaplaClient;
use crate::constants::actions;
use crate::error::Result;
use crate::types::{DateType, Order, Params, RequestMethod, merge_attributes, to_payload};

impl QaplaClient {
    /// Push one order.
    ///
    /// `attributes` carries optional pushOrder fields (`amount`, `rows`, ...)
    /// and is merged over the base fields, so it may also override them.
    ///
    /// **Endpoint:** `POST pushOrder`
    pub async fn push_order(&self, order: &Order, attributes: Option<Params>) -> Result<Value> {
        let record = merge_attributes(order, attributes)?;
        let params = bulk_params(actions::PUSH_ORDER, Value::Object(record));
        self.perform_request(actions::PUSH_ORDER, params, RequestMethod::Post)
            .await
    }

    /// Push several orders in one request.
    ///
    /// `orders` is forwarded as-is under the `pushOrder` key.
    ///
    /// **Endpoint:** `POST pushOrder`
    pub async fn push_order_multiple<T: Serialize + ?Sized>(&self, orders: &T) -> Result<Value> {
        let params = bulk_params(actions::PUSH_ORDER, to_payload(orders)?);
        self.perform_request(actions::PUSH_ORDER, params, RequestMethod::Post)
            .await
    }

    /// Get orders created since a date-time or within the last N days.
    ///
    /// **Endpoint:** `GET getOrders`
    pub async fn get_orders_multiple(
        &self,
        date_type: DateType,
        value: impl Into<Value>,
    ) -> Result<Value> {
        let params = date_params(date_type, value.into());
        self.perform_request(actions::GET_ORDERS, params, RequestMethod::Get)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn push_order_body_nests_merged_record() {
        let order = Order {
            id: "2000992995".into(),
            status: "processing".into(),
            created_at: "2017-06-16 11:18:00".into(),
            updated_at: "2017-06-16 16:09:20".into(),
            customer_name: "Roberto Fumarola".into(),
            customer_address: "Via Icelord, 22".into(),
            customer_city: "Crispiano".into(),
            customer_state: "TA".into(),
            customer_zip: "74012".into(),
            payment_type: "creditcard".into(),
        };
        let extra = json!({
            "status": "shipped",
            "amount": "EUR 110.05",
            "rows": [{ "sku": "OXY4", "qty": 1 }],
        });
        let record = merge_attributes(&order, extra.as_object().cloned()).unwrap();
        let params = bulk_params(actions::PUSH_ORDER, Value::Object(record));

        let client = QaplaClient::new("k").unwrap();
        let req = client
            .build_request(actions::PUSH_ORDER, params, RequestMethod::Post)
            .unwrap();
        let body: Value =
            serde_json::from_slice(req.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();

        assert_eq!(body["apiKey"], "k");
        assert_eq!(body["pushOrder"]["status"], "shipped");
        assert_eq!(body["pushOrder"]["id"], "2000992995");
        assert_eq!(body["pushOrder"]["rows"][0]["sku"], "OXY4");
        assert_eq!(req.url().path(), "/1.1/pushOrder/");
    }
}
