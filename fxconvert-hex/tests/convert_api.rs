//! Integration tests for the conversion API.
//!
//! These verify the HTTP-level contract: the success shape, the
//! per-parameter validation map, pass-through of core error status codes,
//! and the static help page.

use std::collections::HashMap;

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use tower::ServiceExt;

use fxconvert_hex::{ConverterService, inbound::HttpServer};
use fxconvert_types::{DayRates, RateTable, RatesHandle};

/// Router over a single-day table: EUR 1.0, GBP 0.89, USD 1.103 @ 2019-10-10.
fn router_with_rates() -> axum::Router {
    let handle = RatesHandle::new();

    let mut rates: DayRates = HashMap::new();
    rates.insert("EUR".to_string(), dec!(1.0));
    rates.insert("GBP".to_string(), dec!(0.89));
    rates.insert("USD".to_string(), dec!(1.103));
    let mut days = HashMap::new();
    days.insert("2019-10-10".parse().unwrap(), rates);
    handle.publish(RateTable::from_days(days).unwrap());

    HttpServer::new(ConverterService::new(handle)).router()
}

/// Router whose service never got a rate table.
fn router_without_rates() -> axum::Router {
    HttpServer::new(ConverterService::new(RatesHandle::new())).router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_convert_success() {
    let response = router_with_rates()
        .oneshot(get(
            "/api/convert?amount=10.00&src-currency=EUR&dest-currency=GBP&reference-date=2019-10-10",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "amount": 8.9, "currency": "GBP" }));
}

#[tokio::test]
async fn test_convert_truncates_end_to_end() {
    // 42 * 1.103 = 46.326 -> 46.32 on the wire, not 46.33
    let response = router_with_rates()
        .oneshot(get(
            "/api/convert?amount=42&src-currency=EUR&dest-currency=USD&reference-date=2019-10-10",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["amount"], serde_json::json!(46.32));
    assert_eq!(json["currency"], "USD");
}

#[tokio::test]
async fn test_missing_params_get_one_message_each() {
    let response = router_with_rates()
        .oneshot(get("/api/convert"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({
            "message": {
                "amount": "amount is required",
                "src-currency": "src-currency is required",
                "dest-currency": "dest-currency is required",
                "reference-date": "reference-date is required",
            }
        })
    );
}

#[tokio::test]
async fn test_non_decimal_amount_is_a_param_error() {
    let response = router_with_rates()
        .oneshot(get(
            "/api/convert?amount=ten&src-currency=EUR&dest-currency=GBP&reference-date=2019-10-10",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "message": { "amount": "amount must be a decimal number" } })
    );
}

#[tokio::test]
async fn test_unknown_currency_passes_core_message_through() {
    let response = router_with_rates()
        .oneshot(get(
            "/api/convert?amount=10.00&src-currency=EUR&dest-currency=CHF&reference-date=2019-10-10",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "message": "No exchange rate found for the currency CHF." })
    );
}

#[tokio::test]
async fn test_unknown_date_passes_core_message_through() {
    let response = router_with_rates()
        .oneshot(get(
            "/api/convert?amount=10.00&src-currency=EUR&dest-currency=GBP&reference-date=2030-01-01",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "message": "No exchange rate found for the selected date 2030-01-01." })
    );
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let response = router_with_rates()
        .oneshot(get(
            "/api/convert?amount=10.00&src-currency=EUR&dest-currency=GBP&reference-date=2019-02-30",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "message": "reference date must be a string in YYYY-MM-DD format" })
    );
}

#[tokio::test]
async fn test_overflowing_amount_is_a_caller_error_not_a_crash() {
    // Largest representable decimal; times the 1.103 USD rate it cannot fit.
    let response = router_with_rates()
        .oneshot(get(
            "/api/convert?amount=79228162514264337593543950335&src-currency=EUR&dest-currency=USD&reference-date=2019-10-10",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "message": "amount is out of range for this conversion" })
    );
}

#[tokio::test]
async fn test_no_table_published_is_internal_error() {
    let response = router_without_rates()
        .oneshot(get(
            "/api/convert?amount=10.00&src-currency=EUR&dest-currency=GBP&reference-date=2019-10-10",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "message": "internal error" }));
}

#[tokio::test]
async fn test_help_page_served_on_both_routes() {
    for uri in ["/", "/help"] {
        let response = router_with_rates().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"), "got {content_type}");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Currency Converter"));
        assert!(page.contains("/api/convert"));
    }
}

#[tokio::test]
async fn test_parsed_document_serves_conversions_end_to_end() {
    let document = r#"<Envelope>
    <Cube>
        <Cube time='2019-10-09'>
            <Cube currency='USD' rate='1.0978'/>
        </Cube>
    </Cube>
</Envelope>"#;

    let handle = RatesHandle::new();
    handle.publish(fxconvert_rates::parse_rate_document(document).unwrap());
    let router = HttpServer::new(ConverterService::new(handle)).router();

    let response = router
        .oneshot(get(
            "/api/convert?amount=100&src-currency=USD&dest-currency=EUR&reference-date=2019-10-09",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    // 100 / 1.0978 = 91.091... -> truncated
    assert_eq!(json["amount"], serde_json::json!(91.09));
    assert_eq!(json["currency"], "EUR");
}

#[tokio::test]
async fn test_health() {
    let response = router_with_rates().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}
