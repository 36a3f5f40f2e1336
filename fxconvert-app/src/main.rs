//! # fxconvert Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the rate document source, cache and updater
//! - Run the startup refresh (best-effort)
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxconvert_hex::{ConverterService, inbound::HttpServer};
use fxconvert_rates::{DocumentStore, EcbSource, RateUpdater};
use fxconvert_types::RatesHandle;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fxconvert_app=debug,fxconvert_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting conversion server on port {}", config.port);
    tracing::info!("Using rate source: {}", config.rates_url);

    // Wire the rate pipeline around the shared handle
    let rates = RatesHandle::new();
    let updater = Arc::new(RateUpdater::new(
        EcbSource::new(config.rates_url),
        DocumentStore::new(config.rates_cache_path),
        rates.clone(),
    ));

    // Best-effort startup refresh: the server still comes up without rates
    // and answers conversions with 500 until a refresh succeeds.
    if let Err(err) = updater.refresh().await {
        tracing::error!("startup rate refresh failed: {err}");
    }

    if let Some(interval) = config.refresh_interval {
        tracing::info!("Refreshing rates every {}s", interval.as_secs());
        let updater = updater.clone();
        tokio::spawn(async move { updater.run_periodic(interval).await });
    }

    // Create and run the HTTP server
    let service = ConverterService::new(rates);
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
