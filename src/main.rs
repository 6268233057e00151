use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use url::Url;

use provoxy::{ProxySettings, resolve_from_env};

/// Resolve proxy settings for a provisioning run from the environment.
#[derive(Parser, Debug)]
#[command(name = "provoxy", version, about)]
struct Cli {
    /// Only apply proxy settings when PROGRAM is installed (found on PATH)
    #[arg(long, value_name = "PROGRAM")]
    plugin: Option<String>,

    /// Output format for the resolved settings
    #[arg(long, value_enum, default_value = "plain")]
    format: Format,

    /// Also report the proxy selected for this URL
    url: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Plain,
    Sh,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn".to_string())
                .as_str(),
        )
        .init();

    let cli = Cli::parse();

    let plugin_available = match &cli.plugin {
        Some(program) => match which::which(program) {
            Ok(path) => {
                info!(program = %program, path = %path.display(), "proxy plugin found");
                true
            }
            Err(_) => {
                info!(program = %program, "proxy plugin not installed");
                false
            }
        },
        None => true,
    };

    let Some(settings) = resolve_from_env(plugin_available) else {
        // Plugin unavailable: nothing to apply, which is not an error.
        return Ok(());
    };

    print_settings(&settings, cli.format)?;

    if let Some(raw) = &cli.url {
        let url = Url::parse(raw).with_context(|| format!("invalid URL: {raw}"))?;
        let host = url
            .host_str()
            .with_context(|| format!("URL has no host: {raw}"))?;
        println!("Proxy for {url}: {}", proxy_for(&settings, url.scheme(), host));
    }

    Ok(())
}

fn print_settings(settings: &ProxySettings, format: Format) -> Result<()> {
    match format {
        Format::Plain => {
            println!("http_proxy:  {}", settings.http_proxy);
            println!("https_proxy: {}", settings.https_proxy);
            println!("no_proxy:    {}", settings.no_proxy);
        }
        Format::Sh => {
            println!("export http_proxy={}", shell_quote(&settings.http_proxy));
            println!("export https_proxy={}", shell_quote(&settings.https_proxy));
            println!("export no_proxy={}", shell_quote(&settings.no_proxy));
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(settings)?);
        }
    }
    Ok(())
}

fn proxy_for<'a>(settings: &'a ProxySettings, scheme: &str, host: &str) -> &'a str {
    if settings.bypasses(host) {
        return "DIRECT";
    }
    let proxy = settings.proxy_for_scheme(scheme);
    if proxy.is_empty() { "DIRECT" } else { proxy }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
