//! Integration tests for the mock `/api/jobs` endpoint.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body: Value = serde_json::from_slice(&bytes).expect("parse body");

    (status, body)
}

#[tokio::test]
async fn jobs_endpoint_returns_four_fixed_listings() {
    let (app, _pool) = common::spawn_app().await;

    let (status, body) = get_json(&app, "/api/jobs").await;

    assert_eq!(status, StatusCode::OK);
    let jobs = body.as_array().expect("array body");
    assert_eq!(jobs.len(), 4);
    assert_eq!(jobs[0]["title"], "Construction Worker");
    assert_eq!(jobs[0]["location"], "Tokyo");
    assert_eq!(jobs[0]["salary"], "250,000 JPY");
    assert_eq!(jobs[3]["type"], "Tokutei Ginou");
}

#[tokio::test]
async fn jobs_endpoint_ignores_request_parameters() {
    let (app, _pool) = common::spawn_app().await;

    let (_, plain) = get_json(&app, "/api/jobs").await;
    let (status, filtered) = get_json(&app, "/api/jobs?location=Osaka&limit=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(plain, filtered);
}
