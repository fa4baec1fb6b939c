//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap a whole request/response exchange with the configured deadline
//! - Cancel the in-flight future when the deadline passes
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other errors
//! - No deadline at all when the caller configured none

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::error::{DashboardResult, Error};

/// Run `fut`, failing with [`Error::Timeout`] once `deadline` has elapsed.
pub async fn enforce<F, T>(deadline: Option<Duration>, fut: F) -> DashboardResult<T>
where
    F: Future<Output = DashboardResult<T>>,
{
    match deadline {
        Some(limit) => timeout(limit, fut).await.map_err(|_| Error::Timeout(limit))?,
        None => fut.await,
    }
}
