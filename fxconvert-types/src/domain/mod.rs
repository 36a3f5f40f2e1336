//! Domain models for the conversion service.

pub mod convert;
pub mod rates;

pub use convert::{Conversion, convert, parse_reference_date, resolve_factor};
pub use rates::{DayRates, RateTable, RatesHandle};
