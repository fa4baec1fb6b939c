//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! transport + dashboard emit tracing events
//!     (request_id, path, status, elapsed_ms; never the API key)
//!     → logging.rs (optional fmt subscriber for binaries)
//! ```

pub mod logging;

pub use logging::init_logging;
