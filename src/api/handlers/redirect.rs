//! Handler for the redirect endpoint.

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::api::dto::redirect::RedirectQuery;
use crate::domain::click_event::{ClickEvent, RequestMeta};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a redirect request and issues a 302 to the destination.
///
/// # Endpoint
///
/// `GET /go?to=<url>` or `GET /go?asin=<ASIN>&tag=<tag>`
///
/// # Request Flow
///
/// 1. Resolve the destination (direct URL or product identifier branch)
/// 2. If click logging is enabled, enqueue an audit record (non-blocking)
/// 3. Respond `302 Found` with the `Location` header
///
/// The audit write is fire-and-forget: the response never waits for it,
/// and a full queue or dead worker only produces a warning log.
///
/// # Errors
///
/// Returns 400 with a plain-text reason when the `to` URL has no HTTP(S)
/// scheme, the target host is not allowlisted, or no target is derivable.
pub async fn redirect_handler(
    Query(query): Query<RedirectQuery>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let target = state.redirect_service.resolve(&query)?;

    if let Some(sender) = &state.click_sender {
        let meta = RequestMeta::from_request(&headers, addr, state.behind_proxy);
        let event = ClickEvent::from_redirect(
            &query,
            &target,
            meta,
            state.redirect_service.default_tag(),
        );

        // Queue full or worker gone: the redirect is served regardless.
        if let Err(e) = sender.try_send(event) {
            tracing::warn!(error = %e, "failed to enqueue click event");
        }
    }

    Ok((StatusCode::FOUND, [(header::LOCATION, target.url)]).into_response())
}
