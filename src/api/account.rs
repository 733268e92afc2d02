//! Account endpoints — courier catalog and credit balance.

use serde_json::Value;

use crate::client::QaplaClient;
use crate::constants::actions;
use crate::error::Result;
use crate::types::{Params, RequestMethod};

impl QaplaClient {
    /// List the couriers Qapla' currently supports.
    ///
    /// `country` is an optional ISO-2 country code filter.
    ///
    /// **Endpoint:** `GET getCouriers`
    pub async fn get_couriers(&self, country: Option<&str>) -> Result<Value> {
        let mut params = Params::new();
        if let Some(country) = country {
            params.insert("country".into(), country.into());
        }
        self.perform_request(actions::GET_COURIERS, params, RequestMethod::Get)
            .await
    }

    /// Get the number of premium credits left on the account.
    ///
    /// **Endpoint:** `GET getCredits`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use qapla_rs::client::QaplaClient;
    /// # #[tokio::main]
    /// # async fn main() -> qapla_rs::error::Result<()> {
    /// let client = QaplaClient::from_env()?;
    /// let credits = client.get_credits().await?;
    /// println!("{credits}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_credits(&self) -> Result<Value> {
        self.perform_request(actions::GET_CREDITS, Params::new(), RequestMethod::Get)
            .await
    }
}
