//! Rate document source port.
//!
//! This trait defines the interface for retrieving the raw exchange rate
//! document. Implementations can be HTTP clients, fixture readers, etc.

use crate::error::SourceError;

/// Port trait for rate document sources.
#[async_trait::async_trait]
pub trait RateDocumentSource: Send + Sync {
    /// Fetches the current reference-rate document as UTF-8 text.
    async fn fetch_document(&self) -> Result<String, SourceError>;
}
