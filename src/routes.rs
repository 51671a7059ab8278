//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /go`      - Redirect resolution (public)
//! - `GET /health`  - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Cache control** - `Cache-Control: no-store` on every response
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cache_control, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/go", get(redirect_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cache_control::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
