//! DTO for the redirect endpoint.

use serde::Deserialize;

/// Query parameters of `GET /go`.
///
/// Every field is an untrusted, optional string. Exactly one of `to` or a
/// derivable product identifier must resolve a target; a trimmed non-empty
/// `to` takes precedence.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectQuery {
    /// Raw destination URL. Must be HTTP(S) and allowlisted.
    pub to: Option<String>,

    /// Product identifier, as a bare token, product path, or full URL.
    pub asin: Option<String>,

    /// Affiliate tag; falls back to the configured default when blank.
    pub tag: Option<String>,

    /// Source label for the audit record (first 120 chars retained).
    pub src: Option<String>,

    /// Creator label for the audit record (first 200 chars retained).
    pub created_by: Option<String>,

    /// Caller-supplied creation timestamp label (first 80 chars retained).
    pub created_at: Option<String>,
}
