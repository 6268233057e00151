use tracing::trace;

use crate::fnmatch::fnmatch;

/// True when `host` matches one of the comma-separated patterns in `list`
/// and outbound traffic to it must not go through the proxy.
///
/// Entry forms, all ASCII case-insensitive:
/// - `*` matches every host
/// - `.example.com` matches the domain and any subdomain
/// - entries with `*` or `?` match as shell globs
/// - anything else matches the host exactly or as a parent domain
pub fn bypasses(list: &str, host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    let matched = list
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .any(|entry| matches_entry(entry, host));
    if matched {
        trace!(%host, "host is on the no_proxy list");
    }
    matched
}

fn matches_entry(entry: &str, host: &str) -> bool {
    if entry == "*" {
        return true;
    }
    if let Some(domain) = entry.strip_prefix('.') {
        return host.eq_ignore_ascii_case(domain) || is_subdomain(host, domain);
    }
    if entry.contains(['*', '?']) {
        return fnmatch(entry, host);
    }
    host.eq_ignore_ascii_case(entry) || is_subdomain(host, entry)
}

fn is_subdomain(host: &str, domain: &str) -> bool {
    host.len() > domain.len()
        && host.as_bytes()[host.len() - domain.len() - 1] == b'.'
        && host[host.len() - domain.len()..].eq_ignore_ascii_case(domain)
}
