//! Click audit record, built per resolved redirect.

use axum::http::{HeaderMap, header};
use std::net::SocketAddr;

use crate::api::dto::redirect::RedirectQuery;
use crate::application::services::redirect_service::{ResolvedTarget, effective_tag};
use crate::domain::asin::extract_asin;
use crate::utils::client_ip::client_ip;

/// Retention limits for caller-supplied audit labels.
pub const MAX_SRC_LEN: usize = 120;
pub const MAX_CREATED_BY_LEN: usize = 200;
pub const MAX_CREATED_AT_LEN: usize = 80;

/// Transport metadata recorded with a click. Log metadata only, never an
/// authorization signal.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestMeta {
    pub fn from_request(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> Self {
        Self {
            ip: client_ip(headers, peer, behind_proxy),
            user_agent: headers
                .get(header::USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string()),
        }
    }
}

/// An audit record describing one resolved click, passed from the HTTP
/// handler to the background worker via a channel. Immutable once built;
/// building it never fails the surrounding request.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub target_url: String,
    pub asin: Option<String>,
    pub tag: String,
    pub src: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickEvent {
    /// Builds the audit record for a resolved redirect.
    ///
    /// The identifier is computed independently of the resolution branch:
    /// the raw `asin` parameter is tried first, then the resolved
    /// destination URL. This recovers an identifier even when the request
    /// came in via the direct-URL branch but targeted a product page. The
    /// tag defaults exactly as the resolver's does, and over-long labels
    /// are silently truncated.
    pub fn from_redirect(
        query: &RedirectQuery,
        target: &ResolvedTarget,
        meta: RequestMeta,
        default_tag: &str,
    ) -> Self {
        let asin = extract_asin(query.asin.as_deref().unwrap_or(""))
            .or_else(|| extract_asin(&target.url))
            .map(|a| a.into_string());

        Self {
            target_url: target.url.clone(),
            asin,
            tag: effective_tag(query.tag.as_deref(), default_tag),
            src: label(query.src.as_deref(), MAX_SRC_LEN),
            created_by: label(query.created_by.as_deref(), MAX_CREATED_BY_LEN),
            created_at: label(query.created_at.as_deref(), MAX_CREATED_AT_LEN),
            ip: meta.ip,
            user_agent: meta.user_agent,
        }
    }
}

/// Trims a caller-supplied label and truncates it to `max_chars`.
/// Blank labels become `None`; truncation is silent, not an error.
fn label(value: Option<&str>, max_chars: usize) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.chars().take(max_chars).collect())
}
