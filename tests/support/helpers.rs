// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use catalog_insights::application::{
    ports::catalog::CatalogSource,
    queries::articles::{ArticleQueryService, CatalogDefaults},
    services::ApplicationServices,
};
use catalog_insights::domain::catalog::Product;
use catalog_insights::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

use super::builders::dec;
use super::mocks::StaticCatalogSource;

pub const TEST_CATALOG_URL: &str = "http://catalog.test/ProductData.json";

pub fn test_defaults() -> CatalogDefaults {
    CatalogDefaults {
        url: TEST_CATALOG_URL.to_string(),
        price: dec("17.99"),
    }
}

pub fn query_service(source: Arc<dyn CatalogSource>) -> ArticleQueryService {
    ArticleQueryService::new(source, test_defaults())
}

pub fn make_router_with_source(source: Arc<dyn CatalogSource>) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(source, test_defaults()));
    build_router(HttpState { services })
}

pub fn make_test_router(catalog: Vec<Product>) -> axum::Router {
    make_router_with_source(Arc::new(StaticCatalogSource::new(catalog)))
}

/// Issue a GET and return the status with the decoded JSON body.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status
/// and error string; returns the message field.
pub async fn assert_error_response(
    app: axum::Router,
    uri: &str,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    let (status, json) = get_json(app, uri).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}

/// Article ids of a JSON array of article records, in response order.
pub fn article_ids(records: &Value) -> Vec<i64> {
    records
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|record| record["articleId"].as_i64().expect("articleId"))
        .collect()
}
