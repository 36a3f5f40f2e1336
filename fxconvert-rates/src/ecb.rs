//! ECB reference-rate document: HTTP source and XML parsing.
//!
//! The document is the gesmes Envelope published by the European Central
//! Bank: one `Cube` per reference date, each holding one `Cube` per
//! currency with the rate against EUR as an attribute.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use fxconvert_types::{DayRates, LoadError, RateDocumentSource, RateTable, SourceError};

/// Default location of the ECB 90-day reference-rate document.
pub const ECB_HIST_90D_URL: &str =
    "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-hist-90d.xml";

/// The currency every documented rate is expressed against.
const REFERENCE_CURRENCY: &str = "EUR";

/// HTTP source for the ECB reference-rate document.
pub struct EcbSource {
    client: reqwest::Client,
    url: String,
}

impl EcbSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Default for EcbSource {
    fn default() -> Self {
        Self::new(ECB_HIST_90D_URL)
    }
}

#[async_trait::async_trait]
impl RateDocumentSource for EcbSource {
    async fn fetch_document(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct XmlEnvelope {
    #[serde(rename = "Cube")]
    cube: Option<XmlOuterCube>,
}

#[derive(Debug, Deserialize)]
struct XmlOuterCube {
    #[serde(rename = "Cube", default)]
    days: Vec<XmlDayCube>,
}

#[derive(Debug, Deserialize)]
struct XmlDayCube {
    time: String,
    #[serde(rename = "Cube", default)]
    rates: Vec<XmlRateCube>,
}

#[derive(Debug, Deserialize)]
struct XmlRateCube {
    currency: String,
    rate: String,
}

/// Parses the ECB document into a validated [`RateTable`].
///
/// Rates stay in exact base-10 form from attribute text to table entry;
/// EUR itself is inserted at exactly 1 for every date. A document with no
/// dates, an unparseable rate or a non-positive rate is rejected here,
/// never at lookup time.
pub fn parse_rate_document(document: &str) -> Result<RateTable, LoadError> {
    let envelope: XmlEnvelope =
        serde_xml_rs::from_str(document).map_err(|e| LoadError::Parse(e.to_string()))?;

    let mut days = HashMap::new();
    for day in envelope.cube.map(|c| c.days).unwrap_or_default() {
        let date = NaiveDate::parse_from_str(&day.time, "%Y-%m-%d")
            .map_err(|_| LoadError::Parse(format!("invalid reference date {:?}", day.time)))?;

        let mut rates: DayRates = HashMap::with_capacity(day.rates.len() + 1);
        for entry in day.rates {
            let currency = entry.currency.to_uppercase();
            let rate = Decimal::from_str(&entry.rate).map_err(|_| LoadError::InvalidRate {
                currency: currency.clone(),
                date: day.time.clone(),
                value: entry.rate.clone(),
            })?;
            rates.insert(currency, rate);
        }
        rates.insert(REFERENCE_CURRENCY.to_string(), Decimal::ONE);

        days.insert(date, rates);
    }

    RateTable::from_days(days)
}
