//! Integration tests for request validation and routing.
//!
//! These tests drive the full router. They cover the paths that are
//! rejected before any query reaches the store, so no database is needed.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_returns_ok() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("\"status\":\"ok\""));
}

#[tokio::test]
async fn test_v2_films_negative_page_rejected() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v2/films?page=-1").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Page must be non-negative"));
}

#[tokio::test]
async fn test_v1_paged_negative_page_rejected() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/films/paged?page=-1").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Page must be non-negative");
}

#[tokio::test]
async fn test_v1_rental_rate_missing_rate_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PUT", "/api/films/rental-rate?minLength=120")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Rental rate must be a positive value");
}

#[tokio::test]
async fn test_v1_rental_rate_zero_rejected() {
    let app = helpers::TestApp::new();

    let response = app.request("PUT", "/api/films/rental-rate?rate=0").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_v1_rental_rate_negative_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PUT", "/api/films/rental-rate?rate=-1.50")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_v2_rental_rate_missing_rate_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PUT", "/api/v2/films/rental-rate?minLength=120")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Rental rate cannot be null"));
}

#[tokio::test]
async fn test_v2_rental_rate_excessive_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PUT", "/api/v2/films/rental-rate?rate=1500")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Rental rate too high"));
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/unknown").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
