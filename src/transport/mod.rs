//! Transport subsystem.
//!
//! # Data Flow
//! ```text
//! (path, params)
//!     → client.rs (URL composition, auth + request ID headers)
//!     → query.rs (params → query string, order preserved)
//!     → timeouts.rs (deadline around send + body read)
//!     → status check → JSON decode into the caller's type
//! ```
//!
//! # Design Decisions
//! - No retries, caching or pagination; every failure surfaces unchanged
//! - The client holds immutable state only and is safe to share across tasks

pub mod client;
pub mod query;
pub mod timeouts;

pub use client::{versioned_path, DashboardClient, API_KEY_HEADER, REQUEST_ID_HEADER};
