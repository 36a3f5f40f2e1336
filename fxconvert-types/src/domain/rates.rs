//! In-memory exchange rate table and the shared handle that publishes it.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::LoadError;

/// Rates for a single reference date, keyed by 3-letter currency code.
///
/// Each rate expresses units of that currency per one unit of the reference
/// currency (EUR), which itself always maps to exactly 1.
pub type DayRates = HashMap<String, Decimal>;

/// Immutable snapshot of per-date, per-currency exchange rates.
///
/// A table can only be built through [`RateTable::from_days`], which rejects
/// malformed data up front: lookups never have to re-check it.
#[derive(Debug, Clone)]
pub struct RateTable {
    days: HashMap<NaiveDate, DayRates>,
}

impl RateTable {
    /// Builds a table from parsed document data, validating it wholesale.
    ///
    /// Fails if the document yielded no dates at all, or if any rate is not
    /// strictly positive.
    pub fn from_days(days: HashMap<NaiveDate, DayRates>) -> Result<Self, LoadError> {
        if days.is_empty() {
            return Err(LoadError::Empty);
        }
        for (date, rates) in &days {
            for (currency, rate) in rates {
                if *rate <= Decimal::ZERO {
                    return Err(LoadError::InvalidRate {
                        currency: currency.clone(),
                        date: date.to_string(),
                        value: rate.to_string(),
                    });
                }
            }
        }
        Ok(Self { days })
    }

    /// Rates recorded for the given date, if the table covers it.
    pub fn day(&self, date: NaiveDate) -> Option<&DayRates> {
        self.days.get(&date)
    }

    /// Number of reference dates in the table. Always at least 1.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Process-wide handle to the current rate table.
///
/// Readers take an [`Arc`] snapshot and keep using it for the whole request;
/// a refresh builds its table completely off to the side and replaces the
/// reference in a single store. A half-populated table is never observable.
#[derive(Debug, Clone, Default)]
pub struct RatesHandle {
    current: Arc<RwLock<Option<Arc<RateTable>>>>,
}

impl RatesHandle {
    /// Creates an empty handle: no table is published yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replaces the current table.
    pub fn publish(&self, table: RateTable) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(table));
    }

    /// Current table, if one has been published.
    pub fn snapshot(&self) -> Option<Arc<RateTable>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_some()
    }
}
