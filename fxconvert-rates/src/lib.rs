//! # fxconvert Rates
//!
//! Outbound adapter for the currency conversion service: retrieves the ECB
//! reference-rate document, caches the last good copy on disk, parses it
//! into a [`fxconvert_types::RateTable`] and publishes the result through
//! the shared handle.

pub mod ecb;
pub mod store;
pub mod updater;

pub use ecb::{ECB_HIST_90D_URL, EcbSource, parse_rate_document};
pub use store::DocumentStore;
pub use updater::{RateUpdater, RefreshError};
