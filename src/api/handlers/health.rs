//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: healthy (click logging disabled counts as healthy)
/// - **503 Service Unavailable**: the click worker has gone away
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let click_queue = check_click_queue(&state);

    let healthy = click_queue.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { click_queue },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_click_queue(state: &AppState) -> CheckStatus {
    match &state.click_sender {
        None => CheckStatus {
            status: "ok".to_string(),
            message: Some("Click logging disabled".to_string()),
        },
        Some(sender) if sender.is_closed() => CheckStatus {
            status: "error".to_string(),
            message: Some("Click worker unavailable".to_string()),
        },
        Some(sender) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", sender.max_capacity())),
        },
    }
}
