//! Authenticated JSON client for the dashboard API.
//!
//! # Responsibilities
//! - Compose request URLs from the base URL and a versioned path
//! - Attach the API key and a request ID to every request
//! - Bound each exchange by the configured timeout
//! - Map failures onto the crate error taxonomy

use std::time::{Duration, Instant};

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::config::{ClientConfig, API_VERSION};
use crate::error::{DashboardResult, Error};
use crate::transport::query::append_query;
use crate::transport::timeouts;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the per-request correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build `/api/{version}{suffix}`.
pub fn versioned_path(suffix: &str) -> String {
    format!("/api/{}{}", API_VERSION, suffix)
}

/// Low-level dashboard client. Holds only immutable configuration and a
/// pooled `reqwest::Client`, so clones are cheap and safe to share.
#[derive(Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl DashboardClient {
    pub fn new(config: ClientConfig) -> DashboardResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("liquidlink-dashboard-sdk/", env!("CARGO_PKG_VERSION")))
            // x-api-key is not stripped on cross-host hops, so 3xx is surfaced as-is.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {}", e)))?;

        tracing::debug!(
            base_url = %config.base_url,
            api_version = config.api_version,
            timeout_ms = config.timeout.map(|t| t.as_millis() as u64),
            "Dashboard client initialized"
        );

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for `path`, which must start with `/`.
    pub fn endpoint(&self, path: &str) -> DashboardResult<Url> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}{}", base, path))
            .map_err(|e| Error::InvalidParams(format!("invalid request path '{}': {}", path, e)))
    }

    /// Issue an authenticated GET against `path` and decode the JSON body as `T`.
    pub async fn get_json<P, T>(&self, path: &str, params: &P) -> DashboardResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut url = self.endpoint(path)?;
        append_query(&mut url, params)?;

        let request_id = Uuid::new_v4();
        let started = Instant::now();
        tracing::debug!(request_id = %request_id, path = %path, "Sending dashboard request");

        let exchange = async {
            let response = self
                .http
                .get(url)
                .header(API_KEY_HEADER, &self.config.api_key)
                .header(REQUEST_ID_HEADER, request_id.to_string())
                .header(ACCEPT, "application/json")
                .send()
                .await
                .map_err(|e| classify(e, self.config.timeout))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| classify(e, self.config.timeout))?;
            Ok::<(StatusCode, String), Error>((status, body))
        };

        let (status, body) = match timeouts::enforce(self.config.timeout, exchange).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    path = %path,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "Dashboard request failed"
                );
                return Err(e);
            }
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        if !status.is_success() {
            tracing::warn!(
                request_id = %request_id,
                path = %path,
                status = status.as_u16(),
                elapsed_ms,
                "Dashboard returned error status"
            );
            return Err(Error::Request {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(
            request_id = %request_id,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "Dashboard request completed"
        );
        serde_json::from_str(&body).map_err(Error::Parse)
    }
}

/// A reqwest timeout only counts as [`Error::Timeout`] when a deadline was configured.
fn classify(err: reqwest::Error, deadline: Option<Duration>) -> Error {
    match deadline {
        Some(limit) if err.is_timeout() => Error::Timeout(limit),
        _ => Error::Transport(err),
    }
}

impl std::fmt::Debug for DashboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardClient")
            .field("config", &self.config)
            .finish()
    }
}
