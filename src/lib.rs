//! Resolve the proxy settings a provisioning run applies to its outbound
//! clients.
//!
//! The settings come from the `http_proxy`, `https_proxy` and `no_proxy`
//! environment variables, gated on whether the host's proxy-configuration
//! plugin is available. A missing variable is an empty setting, never an
//! error; a missing or empty `https_proxy` takes the value of `http_proxy`.

pub mod bypass;
pub mod fnmatch;
pub mod resolver;
pub mod settings;

pub use resolver::{resolve_from_env, resolve_with};
pub use settings::ProxySettings;
