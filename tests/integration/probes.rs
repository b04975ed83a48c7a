//! Probe endpoint tests: readiness lifecycle, health envelope, root info.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use vitals::config::Environment;
use vitals::server::spawn_startup_task;

use crate::helpers::{assert_body_contains, json_body, TestServer};

/// RFC 3339 UTC with millisecond precision, e.g. 2024-01-15T10:50:45.123Z
fn assert_timestamp_shape(body: &Value) {
    let ts = body["timestamp"].as_str().expect("timestamp not a string");
    assert_eq!(ts.len(), 24, "unexpected timestamp length: {}", ts);
    assert_eq!(&ts[10..11], "T");
    assert!(ts.ends_with('Z'), "timestamp not UTC: {}", ts);
}

#[tokio::test]
async fn test_ready_reports_not_ready_before_startup_completes() {
    let server = TestServer::spawn(Environment::Dev).await;

    let response = server
        .get_expecting("/ready", StatusCode::SERVICE_UNAVAILABLE)
        .await;
    assert_eq!(response.headers()["Content-Type"], "application/json");

    let body = json_body(response).await;
    assert_eq!(body["status"], "not ready");
    assert_eq!(body["details"]["reason"], "initializing");
    assert_timestamp_shape(&body);
}

#[tokio::test]
async fn test_ready_flips_once_gate_opens() {
    let server = TestServer::spawn(Environment::Dev).await;
    server.state.readiness.mark_ready();

    let response = server.get_expecting("/ready", StatusCode::OK).await;

    let body = json_body(response).await;
    assert_eq!(body["status"], "ready");
    assert!(
        body.get("details").is_none(),
        "ready response carries details"
    );
    assert_timestamp_shape(&body);
}

#[tokio::test]
async fn test_startup_task_opens_the_gate() {
    let server = TestServer::spawn(Environment::Dev).await;

    server
        .get_expecting("/ready", StatusCode::SERVICE_UNAVAILABLE)
        .await;

    spawn_startup_task(Arc::clone(&server.state), Some(Duration::from_millis(50)));
    server.wait_for_ready(Duration::from_secs(2)).await;

    server.get_expecting("/ready", StatusCode::OK).await;
}

#[tokio::test]
async fn test_startup_task_without_delay_opens_gate_immediately() {
    let server = TestServer::spawn(Environment::Dev).await;

    // Delay disabled (STARTUP_DELAY=off/0): the task never sleeps, so the
    // gate opens as soon as it is scheduled.
    spawn_startup_task(Arc::clone(&server.state), None);
    server.wait_for_ready(Duration::from_secs(2)).await;

    server.get_expecting("/ready", StatusCode::OK).await;
}

#[tokio::test]
async fn test_health_envelope_matches_status_code() {
    let server = TestServer::spawn(Environment::Dev).await;

    // The verdict depends on the machine the test runs on, so assert the
    // envelope invariants for whichever side we got.
    let response = server.get("/health").await;
    let status = response.status();
    assert_eq!(response.headers()["Content-Type"], "application/json");

    let body = json_body(response).await;
    assert_timestamp_shape(&body);

    if status == StatusCode::OK {
        assert_eq!(body["status"], "healthy");
        assert!(
            body.get("details").is_none(),
            "healthy response carries details"
        );
    } else {
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
        let details = body["details"].as_object().expect("details not an object");
        assert!(!details.is_empty());
        for (check, message) in details {
            assert!(
                check == "process_memory" || check == "system_memory",
                "unexpected check name: {}",
                check
            );
            assert!(message.as_str().unwrap().starts_with("WARNING:"));
        }
    }
}

#[tokio::test]
async fn test_health_does_not_depend_on_readiness() {
    let server = TestServer::spawn(Environment::Dev).await;

    // Liveness must answer while the readiness gate is still closed.
    let response = server.get("/health").await;
    assert!(
        response.status() == StatusCode::OK
            || response.status() == StatusCode::SERVICE_UNAVAILABLE
    );

    let body = json_body(response).await;
    assert!(body["status"].is_string());
}

#[tokio::test]
async fn test_root_reports_service_info() {
    let server = TestServer::spawn(Environment::Dev).await;

    let response = server.get_expecting("/", StatusCode::OK).await;
    assert_eq!(response.headers()["Content-Type"], "application/json");

    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        "Hello from DEV! Development environment - safe for debugging!"
    );
    assert_eq!(body["environment"], "dev");
    assert_eq!(body["version"], "0.0.0-test");
    assert!(!body["hostname"].as_str().unwrap().is_empty());
    assert_timestamp_shape(&body);
}

#[tokio::test]
async fn test_root_greeting_tracks_environment() {
    let server = TestServer::spawn(Environment::Prod).await;

    let body = json_body(server.get("/").await).await;
    assert_eq!(
        body["message"],
        "Hello from PROD! Live environment - handle with care!"
    );
    assert_eq!(body["environment"], "prod");
}

#[tokio::test]
async fn test_unknown_path_returns_404() {
    let server = TestServer::spawn(Environment::Dev).await;

    let response = server
        .get_expecting("/nonexistent", StatusCode::NOT_FOUND)
        .await;
    assert_eq!(response.headers()["Content-Type"], "text/plain");
    assert_body_contains(response, "Not Found").await;
}

#[tokio::test]
async fn test_routing_matches_exact_paths_only() {
    let server = TestServer::spawn(Environment::Dev).await;

    for path in ["/health/live", "/readyz", "/HEALTH"] {
        server.get_expecting(path, StatusCode::NOT_FOUND).await;
    }
}
