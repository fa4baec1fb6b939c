//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject a missing or empty API key before any client exists
//! - Validate value ranges (timeout > 0, base URL is http or https)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientOptions → Result<(), Vec<ValidationError>>
//! - Runs before a transport client is constructed

use std::fmt;

use url::Url;

use crate::config::schema::ClientOptions;

/// A single semantic problem found in the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check client options, collecting every problem.
pub fn validate_options(options: &ClientOptions) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match options.api_key.as_deref() {
        None => errors.push(ValidationError::new("api_key", "apiKey is required")),
        Some("") => errors.push(ValidationError::new("api_key", "apiKey must not be empty")),
        Some(key) if !key.bytes().all(|b| b.is_ascii_graphic()) => errors.push(
            ValidationError::new("api_key", "apiKey may only contain visible ASCII characters"),
        ),
        Some(_) => {}
    }

    if let Some(raw) = options.base_url.as_deref() {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError::new(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            )),
            Err(e) => errors.push(ValidationError::new(
                "base_url",
                format!("'{}' is not a valid URL: {}", raw, e),
            )),
        }
    }

    if options.timeout_ms == Some(0) {
        errors.push(ValidationError::new("timeout_ms", "must be greater than zero"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
