//! HTTP request handlers.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use fxconvert_types::{ConvertError, ConvertResponse, ErrorBody};

use crate::ConverterService;

/// Application state shared across handlers.
pub struct AppState {
    pub service: ConverterService,
}

/// Wrapper mapping failures onto transport responses (orphan rule workaround
/// for the core error type).
pub enum ApiError {
    /// A failure raised by the core; its status code and message pass
    /// through unchanged.
    Convert(ConvertError),
    /// Request parameters that never made it to the core: one message per
    /// failing parameter.
    Params(BTreeMap<String, String>),
}

impl From<ConvertError> for ApiError {
    fn from(err: ConvertError) -> Self {
        ApiError::Convert(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Convert(err) => {
                let status = StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Json(ErrorBody::text(err.to_string()))).into_response()
            }
            ApiError::Params(problems) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::params(problems))).into_response()
            }
        }
    }
}

/// Raw query parameters of a conversion request.
///
/// Everything arrives optional; presence and type coercion are checked in
/// one pass so the caller gets every parameter problem at once.
#[derive(Debug, Deserialize)]
pub struct ConvertParams {
    amount: Option<String>,
    #[serde(rename = "src-currency")]
    src_currency: Option<String>,
    #[serde(rename = "dest-currency")]
    dest_currency: Option<String>,
    #[serde(rename = "reference-date")]
    reference_date: Option<String>,
}

impl ConvertParams {
    fn validated(self) -> Result<(Decimal, String, String, String), BTreeMap<String, String>> {
        let mut problems = BTreeMap::new();

        let amount = match self.amount.as_deref() {
            None => {
                problems.insert("amount".to_string(), "amount is required".to_string());
                None
            }
            Some(raw) => match Decimal::from_str(raw) {
                Ok(value) => Some(value),
                Err(_) => {
                    problems.insert(
                        "amount".to_string(),
                        "amount must be a decimal number".to_string(),
                    );
                    None
                }
            },
        };
        let src = require(self.src_currency, "src-currency", &mut problems);
        let dst = require(self.dest_currency, "dest-currency", &mut problems);
        let date = require(self.reference_date, "reference-date", &mut problems);

        match (amount, src, dst, date) {
            (Some(amount), Some(src), Some(dst), Some(date)) if problems.is_empty() => {
                Ok((amount, src, dst, date))
            }
            _ => Err(problems),
        }
    }
}

fn require(
    value: Option<String>,
    name: &str,
    problems: &mut BTreeMap<String, String>,
) -> Option<String> {
    if value.is_none() {
        problems.insert(name.to_string(), format!("{name} is required"));
    }
    value
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Serves the static help page for `/` and `/help`.
pub async fn help() -> Html<&'static str> {
    Html(include_str!("../../assets/help.html"))
}

/// Converts an amount between two currencies at a reference date.
#[tracing::instrument(skip(state))]
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConvertParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (amount, src, dst, date) = params.validated().map_err(ApiError::Params)?;
    let conversion = state.service.convert(amount, &src, &dst, &date)?;
    Ok(Json(ConvertResponse::from(conversion)))
}
