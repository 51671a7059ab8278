mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_ok_with_logging_enabled() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["click_queue"]["status"], "ok");
}

#[tokio::test]
async fn test_health_ok_with_logging_disabled() {
    let state = common::create_test_state_without_logging();
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(
        body["checks"]["click_queue"]["message"],
        "Click logging disabled"
    );
}

#[tokio::test]
async fn test_health_degraded_when_worker_gone() {
    let (state, rx) = common::create_test_state();
    drop(rx);
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["click_queue"]["status"], "error");
}
