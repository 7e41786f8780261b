// src/config/validate.rs

use reqwest::Url;

use crate::config::model::RelayConfig;
use crate::errors::{AutoreloadError, Result};

/// Check that the relay configuration can actually be used.
///
/// This checks:
/// - `host` is an absolute `http` or `https` URL
/// - the combined reset URL parses
/// - `request_timeout_secs >= 1`
pub fn validate_config(cfg: &RelayConfig) -> Result<()> {
    validate_host(cfg)?;
    validate_reset_url(cfg)?;
    validate_timeout(cfg)?;
    Ok(())
}

fn validate_host(cfg: &RelayConfig) -> Result<()> {
    let url = Url::parse(&cfg.host).map_err(|e| {
        AutoreloadError::Config(format!("invalid host '{}': {e}", cfg.host))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AutoreloadError::Config(format!(
            "host '{}' uses unsupported scheme '{other}' (expected http or https)",
            cfg.host
        ))),
    }
}

fn validate_reset_url(cfg: &RelayConfig) -> Result<()> {
    let url = cfg.reset_url();
    Url::parse(&url)
        .map(|_| ())
        .map_err(|e| AutoreloadError::Config(format!("invalid reset URL '{url}': {e}")))
}

fn validate_timeout(cfg: &RelayConfig) -> Result<()> {
    if cfg.request_timeout_secs == 0 {
        return Err(AutoreloadError::Config(
            "request_timeout_secs must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
