//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{response_json, TestApp};

/// Health check returns 200 with a status field while the store answers
#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}
