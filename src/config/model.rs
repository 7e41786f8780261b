// src/config/model.rs

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "http://localhost:8042";
pub const DEFAULT_RESET_PATH: &str = "/tools/reset";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Everything the relay needs to know about the server it talks to.
///
/// Mirrors an optional TOML file such as:
///
/// ```toml
/// host = "http://localhost:8042"
/// reset_path = "/tools/reset"
/// username = "orthanc"
/// password = "orthanc"
/// request_timeout_secs = 30
/// ```
///
/// Every key is optional. Leave `username` or `password` empty to send
/// requests without basic authentication.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelayConfig {
    /// Scheme, host and port of the server, e.g. `http://localhost:8042`.
    pub host: String,

    /// Path of the reset endpoint on `host`.
    pub reset_path: String,

    pub username: String,
    pub password: String,

    /// Upper bound for a single reset request.
    pub request_timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            reset_path: DEFAULT_RESET_PATH.to_string(),
            username: String::new(),
            password: String::new(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Basic-auth credential pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl RelayConfig {
    /// Full URL the reset request is posted to.
    pub fn reset_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        let path = self.reset_path.trim();
        if path.starts_with('/') {
            format!("{host}{path}")
        } else {
            format!("{host}/{path}")
        }
    }

    /// Credentials to attach, only when both halves are set.
    pub fn credentials(&self) -> Option<Credentials<'_>> {
        if self.username.is_empty() || self.password.is_empty() {
            return None;
        }
        Some(Credentials {
            username: &self.username,
            password: &self.password,
        })
    }
}
