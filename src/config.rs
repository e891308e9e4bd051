//! Client configuration.

use keyring::Entry;
use std::env;
use std::time::Duration;
use url::Url;

use crate::client::Client;
use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "https://api.stratus.dev";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable client configuration.
///
/// Created once through [`ClientBuilder`] and never mutated afterwards;
/// per-call overrides (e.g. a different organization) are passed as call
/// parameters, never written back.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    token: String,
    organization: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// The default organization, if one was configured.
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Base endpoint, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for [`Client`].
///
/// Keep this surface small and predictable: token, organization, base URL,
/// timeout. Everything else is a per-call concern.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    token: Option<String>,
    organization: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from the environment and OS keyring.
    ///
    /// Lookup order for the credential: keyring entry
    /// (`stratus-client` / `api-token`), then `STRATUS_API_TOKEN`.
    /// `STRATUS_ORGANIZATION`, `STRATUS_BASE_URL` and
    /// `STRATUS_TIMEOUT_SECS` fill the remaining fields when present.
    pub fn from_env() -> Self {
        let timeout = env::var("STRATUS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);
        Self {
            token: resolve_token(),
            organization: env::var("STRATUS_ORGANIZATION").ok(),
            base_url: env::var("STRATUS_BASE_URL").ok(),
            timeout,
        }
    }

    /// Bearer token used to authenticate every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Default organization for organization-scoped operations.
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Override the base endpoint (primarily for testing against a mock).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration and construct a [`Client`].
    pub fn build(self) -> crate::Result<Client> {
        let token = self.token.ok_or(ConfigError::MissingToken)?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|_| ConfigError::InvalidBaseUrl(base_url.clone()))?;
        let config = ClientConfig {
            token,
            organization: self.organization,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };
        Client::new(config)
    }
}

fn resolve_token() -> Option<String> {
    // Keyring first, environment as fallback. Both are best-effort.
    if let Ok(entry) = Entry::new("stratus-client", "api-token") {
        if let Ok(token) = entry.get_password() {
            return Some(token);
        }
    }
    env::var("STRATUS_API_TOKEN").ok()
}
