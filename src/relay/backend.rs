// src/relay/backend.rs

//! Pluggable reload backend abstraction.
//!
//! The runtime talks to a `ReloadBackend` instead of an HTTP client directly,
//! so tests can observe exactly which modifications were relayed.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::RelayConfig;
use crate::errors::{AutoreloadError, Result};

/// Trait abstracting how a reload is requested.
pub trait ReloadBackend: Send {
    /// Relay a single modification of `path`.
    ///
    /// Resolves once the request has completed (or failed); the runtime
    /// never has two of these in flight at once.
    fn request_reload(
        &mut self,
        path: PathBuf,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Production backend: `POST <host><reset_path>` with optional basic auth.
#[derive(Debug, Clone)]
pub struct HttpReloadBackend {
    client: Client,
    url: String,
    username: Option<String>,
    password: Option<String>,
}

impl HttpReloadBackend {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let (username, password) = match config.credentials() {
            Some(creds) => (
                Some(creds.username.to_string()),
                Some(creds.password.to_string()),
            ),
            None => (None, None),
        };

        Ok(Self {
            client,
            url: config.reset_url(),
            username,
            password,
        })
    }

    /// URL every reset request is sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether requests carry basic-auth credentials.
    pub fn uses_auth(&self) -> bool {
        self.username.is_some()
    }

    async fn post_reset(&self, path: &Path) -> Result<()> {
        let mut request = self.client.post(&self.url);
        if let Some(user) = &self.username {
            request = request.basic_auth(user, self.password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(url = %self.url, %status, path = ?path, "reset request answered");

        if !status.is_success() {
            return Err(AutoreloadError::HttpStatus {
                url: self.url.clone(),
                status,
            });
        }
        Ok(())
    }
}

impl ReloadBackend for HttpReloadBackend {
    fn request_reload(
        &mut self,
        path: PathBuf,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move { self.post_reset(&path).await })
    }
}
