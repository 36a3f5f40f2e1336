//! Input validation and the conversion engine.
//!
//! Pure functions over an immutable [`RateTable`] snapshot: validation gates
//! run first, rate lookups second, arithmetic last. Any failure surfaces as
//! a single [`ConvertError`] propagated verbatim to the HTTP adapter.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::rates::RateTable;
use crate::error::{ConvertError, CurrencyRole};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Converted amount, truncated to two decimal places.
    pub amount: Decimal,
    /// Destination currency code, echoed back unchanged.
    pub currency: String,
}

/// Validates a reference date string and parses it.
///
/// Accepts exactly `YYYY-MM-DD` with a real calendar date; reordered
/// components, other separators, unpadded fields and impossible dates such
/// as `2019-02-30` are all rejected.
pub fn parse_reference_date(date: &str) -> Result<NaiveDate, ConvertError> {
    if !has_iso_date_shape(date) {
        return Err(ConvertError::InvalidDate);
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ConvertError::InvalidDate)
}

// chrono alone accepts unpadded fields like "2019-1-1", so the shape is
// checked byte-for-byte before it gets to decide calendar validity.
fn has_iso_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter()
            .enumerate()
            .all(|(i, c)| if i == 4 || i == 7 { *c == b'-' } else { c.is_ascii_digit() })
}

fn validate_currency(code: &str, role: CurrencyRole) -> Result<(), ConvertError> {
    if code.trim().is_empty() {
        return Err(ConvertError::InvalidCurrency(role));
    }
    Ok(())
}

/// Resolves the conversion factor between two currencies at a given date.
///
/// Both rates are expressed relative to the reference currency, so the
/// factor is their ratio; it is always positive because the table rejects
/// non-positive rates at load time.
pub fn resolve_factor(
    table: &RateTable,
    src_currency: &str,
    dst_currency: &str,
    date: &str,
) -> Result<Decimal, ConvertError> {
    let day_key = parse_reference_date(date)?;
    validate_currency(src_currency, CurrencyRole::Source)?;
    validate_currency(dst_currency, CurrencyRole::Destination)?;

    let day = table
        .day(day_key)
        .ok_or_else(|| ConvertError::DateNotFound(date.to_string()))?;
    let src_rate = day
        .get(src_currency)
        .ok_or_else(|| ConvertError::CurrencyNotFound(src_currency.to_string()))?;
    let dst_rate = day
        .get(dst_currency)
        .ok_or_else(|| ConvertError::CurrencyNotFound(dst_currency.to_string()))?;

    dst_rate
        .checked_div(*src_rate)
        .ok_or(ConvertError::AmountOutOfRange)
}

/// Converts an amount between two currencies at the given reference date.
///
/// The result is truncated (never rounded up) to two decimal places: a
/// converted amount is deliberately never overstated. `42 * 1.103 = 46.326`
/// comes back as `46.32`, not `46.33`.
pub fn convert(
    table: &RateTable,
    amount: Decimal,
    src_currency: &str,
    dst_currency: &str,
    date: &str,
) -> Result<Conversion, ConvertError> {
    let factor = resolve_factor(table, src_currency, dst_currency, date)?;
    // The amount comes straight off the wire; checked arithmetic turns an
    // overflowing request into a caller error instead of a panic.
    let converted = amount
        .checked_mul(factor)
        .ok_or(ConvertError::AmountOutOfRange)?
        .round_dp_with_strategy(2, RoundingStrategy::ToZero);
    Ok(Conversion {
        amount: converted,
        currency: dst_currency.to_string(),
    })
}
