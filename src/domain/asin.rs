//! Product identifier (ASIN) extraction and normalization.
//!
//! Identifiers arrive in several shapes: a bare token (`B08N5WRWNW`), a
//! product-page path (`/dp/B08N5WRWNW/ref=x`), or a full URL copied from a
//! browser or shortener. Extraction tries a path-shaped pattern first and
//! only then falls back to a standalone token, so an incidental 10-character
//! substring elsewhere in a URL cannot win over an explicit product path.
//! The tier order must not be swapped.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Matches `/dp/<ID>`, `/gp/product/<ID>`, or `/product/<ID>` where `<ID>`
/// is 10 alphanumerics followed by `/`, `?`, or end of input.
static PATH_ASIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/(?:dp|gp/product|product)/([A-Z0-9]{10})(?:[/?]|$)").unwrap()
});

/// Fallback: a standalone 10-character alphanumeric token followed by `/`,
/// `?`, or end of input.
static BARE_ASIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([A-Z0-9]{10})(?:[/?]|$)").unwrap());

/// A normalized product identifier: exactly 10 characters, `[A-Z0-9]{10}`,
/// uppercased at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Asin(String);

impl Asin {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Asin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts a product identifier from a bare token, path fragment, or URL.
///
/// Returns `None` when the input is blank or contains no identifier; absence
/// is a valid outcome the caller must handle, not an error.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_asin("B08N5WRWNW").unwrap().as_str(), "B08N5WRWNW");
/// assert_eq!(
///     extract_asin("https://amazon.in/dp/b08n5wrwnw?x=1").unwrap().as_str(),
///     "B08N5WRWNW"
/// );
/// assert!(extract_asin("not-a-product").is_none());
/// ```
pub fn extract_asin(input: &str) -> Option<Asin> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // Path-shaped pattern first; the bare-token fallback only runs when no
    // product path is present anywhere in the input.
    for regex in [&*PATH_ASIN_REGEX, &*BARE_ASIN_REGEX] {
        if let Some(captures) = regex.captures(input) {
            return Some(Asin(captures[1].to_ascii_uppercase()));
        }
    }

    None
}
