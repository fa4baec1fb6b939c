//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ClientOptions (code, or [client] table of a TOML file via loader.rs)
//!     → validation.rs (semantic checks, all errors collected)
//!     → ClientOptions::resolve (defaults filled in)
//!     → ClientConfig (validated, immutable)
//!     → owned by the transport client
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved
//! - A missing API key fails at construction, never at request time
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{ClientConfig, ClientOptions, SdkConfig, API_VERSION, DEFAULT_BASE_URL};
