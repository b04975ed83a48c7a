//! Debug memory endpoint tests: ballast lifecycle and production gating.

use reqwest::StatusCode;

use vitals::config::Environment;

use crate::helpers::{assert_body_contains, json_body, TestServer};

#[tokio::test]
async fn test_allocate_degrades_health_probe() {
    let server = TestServer::spawn(Environment::Dev).await;

    let response = server
        .get_expecting("/debug/memory?action=allocate", StatusCode::OK)
        .await;
    assert_body_contains(response, "Allocated 150MB of memory. Check /health").await;

    // 150 MiB of committed ballast puts the resident set past the process
    // warning threshold regardless of the baseline.
    let response = server
        .get_expecting("/health", StatusCode::SERVICE_UNAVAILABLE)
        .await;

    let body = json_body(response).await;
    assert_eq!(body["status"], "degraded");
    let warning = body["details"]["process_memory"]
        .as_str()
        .expect("missing process_memory warning");
    assert!(warning.starts_with("WARNING:"), "bad warning: {}", warning);
    assert!(warning.ends_with(" MB"), "bad warning: {}", warning);

    let response = server.get("/debug/memory?action=free").await;
    assert_body_contains(response, "Freed debug memory. Check /health").await;
}

#[tokio::test]
async fn test_status_reports_without_mutating() {
    let server = TestServer::spawn(Environment::Dev).await;

    let response = server
        .get_expecting("/debug/memory?action=status", StatusCode::OK)
        .await;
    assert_eq!(response.headers()["Content-Type"], "text/plain");
    assert_body_contains(response, "No debug memory allocated").await;

    server.get("/debug/memory?action=allocate").await;

    let response = server.get("/debug/memory?action=status").await;
    let body = response.text().await.expect("read body");
    assert!(
        body.contains("Current process memory usage:"),
        "body: {}",
        body
    );
    assert!(
        body.contains("Debug memory allocated: 150 MB"),
        "body: {}",
        body
    );

    server.get("/debug/memory?action=free").await;

    let response = server.get("/debug/memory?action=status").await;
    assert_body_contains(response, "No debug memory allocated").await;
}

#[tokio::test]
async fn test_unknown_action_prints_usage() {
    let server = TestServer::spawn(Environment::Dev).await;

    for path in ["/debug/memory", "/debug/memory?action=grow"] {
        let response = server.get_expecting(path, StatusCode::OK).await;
        assert_body_contains(response, "Use ?action=allocate|free|status").await;
    }
}

#[tokio::test]
async fn test_debug_endpoint_absent_in_production() {
    let server = TestServer::spawn(Environment::Prod).await;

    // Indistinguishable from a route that never existed.
    let response = server
        .get_expecting("/debug/memory?action=allocate", StatusCode::NOT_FOUND)
        .await;
    assert_body_contains(response, "Not Found").await;
}
