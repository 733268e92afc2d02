//! # qapla-rs
//!
//! A Rust client library for the [Qapla' REST API 1.1](https://api.qapla.it/).
//!
//! ## Quick Start
//!
//! ```no_run
//! use qapla_rs::client::QaplaClient;
//! use qapla_rs::types::TrackingType;
//!
//! #[tokio::main]
//! async fn main() -> qapla_rs::error::Result<()> {
//!     let client = QaplaClient::new("your-api-key")?;
//!     let track = client
//!         .get_shipping(TrackingType::TrackingNumber, "123987299", None)
//!         .await?;
//!     println!("{track}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod constants;
pub mod error;
pub mod types;

/// Re-export the main client types at crate root for convenience.
pub use client::{ClientConfig, QaplaClient};
/// Re-export the error type and Result alias.
pub use error::{QaplaError, Result};
