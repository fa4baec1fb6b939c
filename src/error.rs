//! Error definitions shared by the transport client and the SDK facade.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while configuring or calling the dashboard API.
#[derive(Debug, Error)]
pub enum Error {
    /// Options were rejected at construction time.
    #[error("[LiquidlinkDashboardSDK] configuration error: {0}")]
    Configuration(String),

    /// Network-level failure (DNS, connect, TLS, body read).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request did not complete within the configured deadline.
    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// The API answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    /// A successful response body was not the expected JSON.
    #[error("failed to parse response body: {0}")]
    Parse(#[source] serde_json::Error),

    /// The parameter object cannot be encoded into a query string.
    #[error("invalid request parameters: {0}")]
    InvalidParams(String),
}

impl Error {
    /// HTTP status code, when the failure came from the API itself.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}

/// Result type for dashboard operations.
pub type DashboardResult<T> = Result<T, Error>;
