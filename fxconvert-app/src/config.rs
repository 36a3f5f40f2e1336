//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use fxconvert_rates::ECB_HIST_90D_URL;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub rates_url: String,
    pub rates_cache_path: String,
    /// When set, rates are re-fetched on this interval; otherwise only at
    /// startup.
    pub refresh_interval: Option<Duration>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let rates_url = env::var("RATES_URL").unwrap_or_else(|_| ECB_HIST_90D_URL.to_string());

        let rates_cache_path = env::var("RATES_CACHE_PATH")
            .unwrap_or_else(|_| "assets/exchange_rates.xml".to_string());

        let refresh_interval = match env::var("RATES_REFRESH_SECS") {
            Ok(secs) => Some(Duration::from_secs(secs.parse()?)),
            Err(_) => None,
        };

        Ok(Self {
            port,
            rates_url,
            rates_cache_path,
            refresh_interval,
        })
    }
}
