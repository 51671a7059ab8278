//! Client IP selection for audit metadata.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Picks the client IP to record with a click.
///
/// When `behind_proxy` is set, the first entry of `X-Forwarded-For` wins
/// over the peer socket address. Enable only behind a trusted reverse
/// proxy; the header is attacker-controlled otherwise. The result is log
/// metadata, never an authorization signal.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> Option<String> {
    if behind_proxy
        && let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok())
    {
        let first = forwarded.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    Some(peer.ip().to_string())
}
