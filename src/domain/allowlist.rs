//! Redirect target allowlist.

use std::collections::HashSet;
use url::Url;

/// The set of hostnames permitted as redirect targets.
///
/// Matching is exact, by design: no wildcard or subdomain matching, so the
/// attack surface stays auditable. Hosts are lowercased when the set is
/// built; [`Url::parse`] lowercases the host side, so membership checks are
/// case-insensitive end to end.
///
/// Built once from configuration at startup and immutable for the process
/// lifetime.
#[derive(Debug, Clone)]
pub struct Allowlist {
    hosts: HashSet<String>,
}

impl Allowlist {
    pub fn new(hosts: impl IntoIterator<Item = String>) -> Self {
        Self {
            hosts: hosts
                .into_iter()
                .map(|h| h.trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    /// Whether the URL's host is a permitted redirect target.
    ///
    /// A URL without a host is never allowed.
    pub fn allows(&self, url: &Url) -> bool {
        url.host_str()
            .map(|host| self.hosts.contains(host))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
