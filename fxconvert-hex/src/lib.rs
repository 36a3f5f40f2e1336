//! # fxconvert Hex
//!
//! Application service layer and HTTP adapter for the currency converter.
//!
//! ## Architecture
//!
//! - `service/` - Application service (table gate + conversion engine)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service owns nothing mutable itself: it holds the shared
//! [`fxconvert_types::RatesHandle`] and computes over immutable snapshots.

pub mod inbound;
pub mod service;


pub use service::ConverterService;
