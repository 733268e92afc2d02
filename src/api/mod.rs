//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`QaplaClient`](crate::client::QaplaClient) via `impl` blocks. Every method
//! shapes its parameters and hands them to
//! [`perform_request`](crate::client::QaplaClient::perform_request).
//!
//! ## Usage
//!
//! ```no_run
//! use qapla_rs::QaplaClient;
//! use qapla_rs::types::DateType;
//!
//! # #[tokio::main]
//! # async fn main() -> qapla_rs::Result<()> {
//! let client = QaplaClient::new("my secret api key")?;
//! let recent = client.get_shipping_multiple(DateType::Days, 3).await?;
//! let credits = client.get_credits().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Actions | Description |
//! |---|---|---|
//! | [`shipments`] | getTrack, getTracks, pushTrack, deleteTrack | Shipment lookup, push, delete |
//! | [`orders`] | pushOrder, getOrders | Order push and lookup |
//! | [`account`] | getCouriers, getCredits | Courier catalog, credit balance |

pub mod account;
pub mod orders;
pub mod shipments;
