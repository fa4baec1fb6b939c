//! Configuration schema definitions.
//!
//! `ClientOptions` is what callers hand to the SDK. `ClientConfig` is the
//! resolved form the transport client owns once validation has passed.
//! All file-facing types derive Serde traits for deserialization from TOML.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::validation::{join_errors, validate_options};
use crate::error::{DashboardResult, Error};

/// Base URL used when the caller does not supply one.
pub const DEFAULT_BASE_URL: &str = "https://api.liquidlink.io";

/// Version segment of every API path.
pub const API_VERSION: &str = "v1";

/// Root of a configuration file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SdkConfig {
    /// Options for the dashboard client.
    pub client: ClientOptions,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Options accepted when constructing the SDK.
#[derive(Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClientOptions {
    /// API key presented on every request. Required.
    pub api_key: Option<String>,

    /// Dashboard base URL (defaults to [`DEFAULT_BASE_URL`]).
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds. No deadline when absent.
    pub timeout_ms: Option<u64>,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Validate the options and fill in defaults.
    ///
    /// Every validation problem is reported in a single
    /// [`Error::Configuration`], not just the first one found.
    pub fn resolve(&self) -> DashboardResult<ClientConfig> {
        validate_options(self).map_err(|errors| Error::Configuration(join_errors(&errors)))?;

        let api_key = self.api_key.clone().unwrap_or_default();
        let raw_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw_url)
            .map_err(|e| Error::Configuration(format!("invalid base_url '{}': {}", raw_url, e)))?;

        Ok(ClientConfig {
            base_url,
            api_version: API_VERSION,
            timeout: self.timeout_ms.map(Duration::from_millis),
            api_key,
        })
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Resolved client configuration. Immutable after construction.
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub api_version: &'static str,
    pub timeout: Option<Duration>,
    pub api_key: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
