//! Response caching is disabled on every response.
//!
//! Redirect decisions depend on process configuration and per-request
//! parameters; a cached 302 or 400 must never be replayed by an
//! intermediary.

use axum::http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;

pub fn layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, max-age=0"),
    )
}
