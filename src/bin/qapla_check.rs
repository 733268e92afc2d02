//! Binary to check a Qapla' API key: prints the credit balance, the courier
//! catalog size, and optionally one shipment.
//!
//! # Usage
//!
//! ```sh
//! export QAPLA_API_KEY="your-api-key"
//! cargo run --bin qapla_check --features cli -- [trackingNumber|orderReference] [value]
//! ```

use std::env;
use std::time::Duration;

use qapla_rs::client::{ClientConfig, QaplaClient};
use qapla_rs::types::TrackingType;

#[tokio::main]
async fn main() -> qapla_rs::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env().timeout(Duration::from_secs(30));
    let client = QaplaClient::from_config(config)?;
    println!("Using {}", client.base_url());

    let credits = client.get_credits().await?;
    println!("Credits: {credits}");

    let couriers = client.get_couriers(None).await?;
    match couriers.get("couriers").and_then(|c| c.as_array()) {
        Some(list) => println!("Couriers: {} available", list.len()),
        None => println!("Couriers: {couriers}"),
    }

    let mut args = env::args().skip(1);
    if let (Some(kind), Some(value)) = (args.next(), args.next()) {
        let kind: TrackingType = kind.parse()?;
        let track = client.get_shipping(kind, &value, None).await?;
        println!("{track:#}");
    }

    println!("Done.");
    Ok(())
}
