//! Conversion application service.
//!
//! Orchestrates the conversion pipeline over the published rate table.
//! Contains NO transport logic - the HTTP adapter maps its errors.

use rust_decimal::Decimal;

use fxconvert_types::{Conversion, ConvertError, RatesHandle, domain};

/// Application service for conversion requests.
///
/// Each call takes an immutable snapshot of the current table, so a refresh
/// landing mid-request never changes the rates that request computes with.
#[derive(Clone)]
pub struct ConverterService {
    rates: RatesHandle,
}

impl ConverterService {
    /// Creates a service over the given rates handle.
    pub fn new(rates: RatesHandle) -> Self {
        Self { rates }
    }

    /// Handle the updater publishes fresh tables through.
    pub fn rates(&self) -> &RatesHandle {
        &self.rates
    }

    /// Converts an amount between two currencies at a reference date.
    ///
    /// Returns `RatesUnavailable` when no table has been published yet (or
    /// the load keeps failing); every other failure comes verbatim from the
    /// conversion engine.
    pub fn convert(
        &self,
        amount: Decimal,
        src_currency: &str,
        dst_currency: &str,
        date: &str,
    ) -> Result<Conversion, ConvertError> {
        let Some(table) = self.rates.snapshot() else {
            return Err(ConvertError::RatesUnavailable);
        };
        domain::convert(&table, amount, src_currency, dst_currency, date)
    }
}
