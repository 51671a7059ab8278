//! Redirect URL parsing and normalization.
//!
//! Client-supplied targets are parsed into [`Url`] before any policy check.
//! Parsing normalizes the hostname to lowercase and drops default ports, so
//! downstream host comparison is case-insensitive.

use url::Url;

/// Errors that can occur while parsing a redirect target.
#[derive(Debug, thiserror::Error)]
pub enum UrlParseError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS schemes are allowed")]
    UnsupportedScheme,
}

/// Parses a raw string into a structured URL suitable as a redirect target.
///
/// Rejects strings without a recognizable scheme+host structure and any
/// scheme other than `http`/`https` (`javascript:`, `data:`, `file:`, ...).
/// Failures surface as [`UrlParseError`]; this function never panics.
pub fn parse_redirect_url(input: &str) -> Result<Url, UrlParseError> {
    let url = Url::parse(input).map_err(|e| UrlParseError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlParseError::UnsupportedScheme),
    }

    Ok(url)
}
