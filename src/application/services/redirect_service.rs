//! Redirect target resolution service.

use url::Url;

use crate::api::dto::redirect::RedirectQuery;
use crate::domain::allowlist::Allowlist;
use crate::domain::asin::{Asin, extract_asin};
use crate::error::AppError;
use crate::utils::url_norm::parse_redirect_url;

/// Base URL that identifier-branch destinations are built on.
const PRODUCT_BASE_URL: &str = "https://www.amazon.in";

/// The single destination produced for a request, together with the
/// identifier and tag that produced it. Both are absent when the request
/// supplied a direct URL.
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    pub url: String,
    pub asin: Option<Asin>,
    pub tag: Option<String>,
}

/// Resolves a request's parameters into exactly one destination URL.
///
/// Two mutually exclusive branches: a trimmed non-empty `to` parameter is
/// resolved as a direct URL (scheme gate, then allowlist); otherwise the
/// `asin` parameter is resolved into an affiliate product URL. There is no
/// merging beyond "non-empty `to` wins".
pub struct RedirectService {
    allowlist: Allowlist,
    default_tag: String,
}

impl RedirectService {
    pub fn new(allowlist: Allowlist, default_tag: String) -> Self {
        Self {
            allowlist,
            default_tag,
        }
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    /// Resolves the destination for a redirect request.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidScheme`] - `to` present but not HTTP(S)
    /// - [`AppError::HostNotAllowed`] - `to` unparsable or host not allowlisted
    /// - [`AppError::MissingTarget`] - neither `to` nor an extractable identifier
    pub fn resolve(&self, query: &RedirectQuery) -> Result<ResolvedTarget, AppError> {
        let to = query.to.as_deref().unwrap_or("").trim();
        if !to.is_empty() {
            return self.resolve_direct(to);
        }

        self.resolve_product(
            query.asin.as_deref().unwrap_or(""),
            query.tag.as_deref(),
        )
    }

    fn resolve_direct(&self, to: &str) -> Result<ResolvedTarget, AppError> {
        if !has_http_prefix(to) {
            return Err(AppError::InvalidScheme);
        }

        let url = parse_redirect_url(to).map_err(|_| AppError::HostNotAllowed)?;
        if !self.allowlist.allows(&url) {
            return Err(AppError::HostNotAllowed);
        }

        Ok(ResolvedTarget {
            url: url.to_string(),
            asin: None,
            tag: None,
        })
    }

    fn resolve_product(
        &self,
        asin_param: &str,
        tag_param: Option<&str>,
    ) -> Result<ResolvedTarget, AppError> {
        let asin = extract_asin(asin_param).ok_or(AppError::MissingTarget)?;
        let tag = effective_tag(tag_param, &self.default_tag);

        let mut url = Url::parse(PRODUCT_BASE_URL)
            .map_err(|e| AppError::internal(format!("Invalid product base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::internal("Product base URL cannot be a base"))?
            .pop_if_empty()
            .extend(["dp", asin.as_str()]);
        url.query_pairs_mut().append_pair("tag", &tag);

        Ok(ResolvedTarget {
            url: url.to_string(),
            asin: Some(asin),
            tag: Some(tag),
        })
    }
}

/// The trimmed `tag` parameter when non-empty, else the default tag.
///
/// Shared with the audit-record builder so both default identically.
pub fn effective_tag(tag: Option<&str>, default_tag: &str) -> String {
    tag.map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(default_tag)
        .to_string()
}

fn has_http_prefix(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
