use serde::{Deserialize, Serialize};

use crate::bypass;

/// Proxy settings as a provisioning run applies them: proxy URLs for HTTP
/// and HTTPS traffic, and the comma-separated `no_proxy` host patterns.
///
/// Built once from an environment snapshot and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySettings {
    /// Value of `http_proxy`, or empty if unset.
    pub http_proxy: String,
    /// Value of `https_proxy` when set and non-empty, otherwise the value
    /// of `http_proxy`. Never empty while `http_proxy` is non-empty.
    pub https_proxy: String,
    /// Value of `no_proxy`, or empty if unset.
    pub no_proxy: String,
}

impl ProxySettings {
    /// True when the environment named no proxy at all.
    pub fn is_empty(&self) -> bool {
        self.http_proxy.is_empty() && self.https_proxy.is_empty() && self.no_proxy.is_empty()
    }

    /// Proxy URL for a URL scheme, before `no_proxy` is consulted.
    /// Only `https` gets the HTTPS proxy; every other scheme gets the
    /// HTTP one.
    pub fn proxy_for_scheme(&self, scheme: &str) -> &str {
        if scheme.eq_ignore_ascii_case("https") {
            &self.https_proxy
        } else {
            &self.http_proxy
        }
    }

    /// True when `host` matches an entry of the `no_proxy` list and the
    /// proxy must not be used for it.
    pub fn bypasses(&self, host: &str) -> bool {
        bypass::bypasses(&self.no_proxy, host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(http: &str, https: &str, no: &str) -> ProxySettings {
        ProxySettings {
            http_proxy: http.to_string(),
            https_proxy: https.to_string(),
            no_proxy: no.to_string(),
        }
    }

    #[test]
    fn scheme_selects_the_matching_proxy() {
        let s = settings("http://p:80", "https://p:443", "");
        assert_eq!(s.proxy_for_scheme("http"), "http://p:80");
        assert_eq!(s.proxy_for_scheme("https"), "https://p:443");
        assert_eq!(s.proxy_for_scheme("HTTPS"), "https://p:443");
        assert_eq!(s.proxy_for_scheme("ftp"), "http://p:80");
    }

    #[test]
    fn empty_settings_report_empty() {
        assert!(settings("", "", "").is_empty());
        assert!(!settings("http://p:80", "http://p:80", "").is_empty());
    }

    #[test]
    fn bypass_consults_the_no_proxy_list() {
        let s = settings("http://p:80", "http://p:80", "localhost,.internal");
        assert!(s.bypasses("localhost"));
        assert!(s.bypasses("db.internal"));
        assert!(!s.bypasses("example.com"));
    }
}
