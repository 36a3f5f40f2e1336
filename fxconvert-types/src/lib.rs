//! # fxconvert Types
//!
//! Domain types and port traits for the currency conversion service.
//! This crate has ZERO external IO dependencies - only data structures,
//! the conversion engine, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Rate table, validation and the conversion engine
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Conversion and load error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Conversion, DayRates, RateTable, RatesHandle, convert, parse_reference_date, resolve_factor,
};
pub use dto::*;
pub use error::{ConvertError, CurrencyRole, LoadError, SourceError};
pub use ports::RateDocumentSource;
