use autoreload::config::RelayConfig;

/// Builder for `RelayConfig` to simplify test setup.
pub struct RelayConfigBuilder {
    config: RelayConfig,
}

impl RelayConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RelayConfig::default(),
        }
    }

    /// Point the relay at a base URL, e.g. `MockServer::base_url()`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn reset_path(mut self, path: &str) -> Self {
        self.config.reset_path = path.to_string();
        self
    }

    pub fn username(mut self, username: &str) -> Self {
        self.config.username = username.to_string();
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.config.password = password.to_string();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    pub fn build(self) -> RelayConfig {
        self.config
    }
}

impl Default for RelayConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
