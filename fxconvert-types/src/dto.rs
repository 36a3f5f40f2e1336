//! Data Transfer Objects (DTOs) for the HTTP boundary.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Conversion;

/// Successful conversion response body.
///
/// The amount is serialized as a JSON number, matching what existing
/// clients of the service expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
}

impl From<Conversion> for ConvertResponse {
    fn from(conversion: Conversion) -> Self {
        Self {
            amount: conversion.amount,
            currency: conversion.currency,
        }
    }
}

/// The `message` field of an error body.
///
/// Request-parsing failures report a map from parameter name to its
/// problem; everything else is a single descriptive string. Untagged, so
/// each arm serializes as the bare shape the original wire format used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    Params(BTreeMap<String, String>),
}

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: ErrorMessage,
}

impl ErrorBody {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: ErrorMessage::Text(message.into()),
        }
    }

    pub fn params(params: BTreeMap<String, String>) -> Self {
        Self {
            message: ErrorMessage::Params(params),
        }
    }
}
