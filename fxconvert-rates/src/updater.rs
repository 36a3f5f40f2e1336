//! Refresh pipeline: fetch the document, fall back to the cached copy,
//! parse, validate and publish.
//!
//! Refreshes are best-effort. A failed refresh is logged and leaves the
//! previously published table in place; in-flight conversions keep their
//! snapshot either way.

use std::time::Duration;

use fxconvert_types::{LoadError, RateDocumentSource, RatesHandle, SourceError};

use crate::ecb::parse_rate_document;
use crate::store::DocumentStore;

/// A refresh attempt that produced no publishable table.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Keeps the shared rate table up to date from a document source.
pub struct RateUpdater<S: RateDocumentSource> {
    source: S,
    store: DocumentStore,
    rates: RatesHandle,
}

impl<S: RateDocumentSource> RateUpdater<S> {
    pub fn new(source: S, store: DocumentStore, rates: RatesHandle) -> Self {
        Self {
            source,
            store,
            rates,
        }
    }

    /// Fetches, parses and publishes a fresh rate table.
    ///
    /// A successful fetch also refreshes the on-disk cache; a failed fetch
    /// falls back to the cached document so a restart without network still
    /// comes up serving rates.
    pub async fn refresh(&self) -> Result<(), RefreshError> {
        let document = match self.source.fetch_document().await {
            Ok(document) => {
                if let Err(err) = self.store.save(&document).await {
                    tracing::warn!(path = %self.store.path().display(), "failed to cache rate document: {err}");
                }
                document
            }
            Err(err) => {
                tracing::warn!("rate document fetch failed, falling back to cached copy: {err}");
                self.store.load().await?
            }
        };

        let table = parse_rate_document(&document)?;
        tracing::info!(dates = table.len(), "publishing fresh rate table");
        self.rates.publish(table);
        Ok(())
    }

    /// Runs `refresh` on a fixed interval, forever.
    ///
    /// The first tick fires after one full interval; the startup refresh is
    /// the caller's responsibility.
    pub async fn run_periodic(&self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(err) = self.refresh().await {
                tracing::error!("scheduled rate refresh failed: {err}");
            }
        }
    }
}
