//! Error types for the conversion service.

use std::fmt;

/// Which side of a conversion a currency parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyRole {
    Source,
    Destination,
}

impl fmt::Display for CurrencyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyRole::Source => write!(f, "source"),
            CurrencyRole::Destination => write!(f, "destination"),
        }
    }
}

/// Failures raised by the conversion engine.
///
/// Every variant is either a caller mistake (400) or a rate table that never
/// loaded (500); nothing else can fail in the pure conversion path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// No rate table is published, or the one that was loaded is unusable.
    #[error("internal error")]
    RatesUnavailable,

    #[error("reference date must be a string in YYYY-MM-DD format")]
    InvalidDate,

    #[error("{0} currency must be a string")]
    InvalidCurrency(CurrencyRole),

    #[error("No exchange rate found for the selected date {0}.")]
    DateNotFound(String),

    #[error("No exchange rate found for the currency {0}.")]
    CurrencyNotFound(String),

    /// The conversion arithmetic left the representable decimal range.
    #[error("amount is out of range for this conversion")]
    AmountOutOfRange,
}

impl ConvertError {
    /// HTTP status code this error translates to at the transport boundary.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::RatesUnavailable => 500,
            Self::InvalidDate
            | Self::InvalidCurrency(_)
            | Self::DateNotFound(_)
            | Self::CurrencyNotFound(_)
            | Self::AmountOutOfRange => 400,
        }
    }
}

/// Failures while building a [`crate::RateTable`] from a source document.
///
/// A document that trips any of these is rejected wholesale at load time;
/// lookups only ever run against a table that passed them all.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed document: {0}")]
    Parse(String),

    #[error("document contains no reference dates")]
    Empty,

    #[error("invalid rate {value:?} for currency {currency} on {date}")]
    InvalidRate {
        currency: String,
        date: String,
        value: String,
    },
}

/// Failures while fetching or caching the source document.
///
/// String-wrapped so this crate stays free of HTTP and filesystem types.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("unexpected response status {0}")]
    Status(u16),

    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ConvertError::RatesUnavailable.status_code(), 500);
        assert_eq!(ConvertError::InvalidDate.status_code(), 400);
        assert_eq!(
            ConvertError::InvalidCurrency(CurrencyRole::Source).status_code(),
            400
        );
        assert_eq!(
            ConvertError::DateNotFound("2019-10-10".into()).status_code(),
            400
        );
        assert_eq!(
            ConvertError::CurrencyNotFound("USD".into()).status_code(),
            400
        );
        assert_eq!(ConvertError::AmountOutOfRange.status_code(), 400);
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            ConvertError::DateNotFound("2019-10-10".into()).to_string(),
            "No exchange rate found for the selected date 2019-10-10."
        );
        assert_eq!(
            ConvertError::CurrencyNotFound("USD".into()).to_string(),
            "No exchange rate found for the currency USD."
        );
    }

    #[test]
    fn test_currency_role_in_message() {
        assert_eq!(
            ConvertError::InvalidCurrency(CurrencyRole::Destination).to_string(),
            "destination currency must be a string"
        );
    }
}
