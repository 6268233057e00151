use tracing::debug;

use crate::settings::ProxySettings;

/// Environment variables consulted, in the exact spelling the
/// provisioning tool reads them. Uppercase variants are not consulted.
pub const HTTP_PROXY: &str = "http_proxy";
pub const HTTPS_PROXY: &str = "https_proxy";
pub const NO_PROXY: &str = "no_proxy";

/// Resolve proxy settings through an environment lookup.
///
/// Returns `None` when the proxy-configuration plugin is unavailable: no
/// settings are applied at all, and the environment is not consulted.
/// Otherwise every missing variable degrades to an empty string, and a
/// missing or empty `https_proxy` takes the value of `http_proxy`.
pub fn resolve_with<F>(plugin_available: bool, getenv: F) -> Option<ProxySettings>
where
    F: Fn(&str) -> Option<String>,
{
    if !plugin_available {
        debug!("proxy plugin unavailable, leaving proxy settings unset");
        return None;
    }

    let http_proxy = getenv(HTTP_PROXY).unwrap_or_default();
    let https_proxy = match getenv(HTTPS_PROXY) {
        Some(value) if !value.is_empty() => value,
        _ => http_proxy.clone(),
    };
    let no_proxy = getenv(NO_PROXY).unwrap_or_default();

    debug!(%http_proxy, %https_proxy, %no_proxy, "resolved proxy settings");
    Some(ProxySettings {
        http_proxy,
        https_proxy,
        no_proxy,
    })
}

/// Resolve proxy settings from the process environment.
pub fn resolve_from_env(plugin_available: bool) -> Option<ProxySettings> {
    resolve_with(plugin_available, |name| std::env::var(name).ok())
}
