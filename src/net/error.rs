//! Normalized error type for calls against the incident-reporter API.
//!
//! ERROR HANDLING
//! ==============
//! The service reports failures as non-2xx responses carrying a JSON body
//! with a `message` or `error` field. Pages show that text verbatim when it
//! exists; everything else collapses to a generic sentence so transport
//! hiccups never leak debug noise into the UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API call, already shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response with a structured error payload.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Non-2xx response without a usable payload.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never produced a response (DNS, CORS, aborted).
    #[error("network error: {0}")]
    Transport(String),
    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Error body shape used across the service. Some routes populate
/// `message`, older ones `error`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Categorize a non-2xx response from its status and raw body text.
pub fn error_from_parts(status: u16, body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            if !message.trim().is_empty() {
                return ApiError::Server { status, message };
            }
        }
    }
    ApiError::Status(status)
}
