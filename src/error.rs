//! Error types for bl-cli
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for bl-cli
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("API error {status}{}: {message}", api_id_suffix(.id))]
    Api {
        status: u16,
        id: Option<String>,
        message: String,
    },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Pagination aborted after {max_pages} pages without reaching the last page")]
    PageLimitExceeded { max_pages: u32 },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an API error from the provider's error object
    pub fn api(status: u16, id: Option<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            id,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error was caused by the request itself (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }
}

/// Result type alias for bl-cli
pub type Result<T> = std::result::Result<T, Error>;

fn api_id_suffix(id: &Option<String>) -> String {
    id.as_deref()
        .map(|id| format!(" ({id})"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("access-token");
        assert_eq!(
            err.to_string(),
            "Missing required config field: access-token"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::api(
            401,
            Some("unauthorized".to_string()),
            "Unable to authenticate you.",
        );
        assert_eq!(
            err.to_string(),
            "API error 401 (unauthorized): Unable to authenticate you."
        );

        let err = Error::api(404, None, "Server not found");
        assert_eq!(err.to_string(), "API error 404: Server not found");

        let err = Error::PageLimitExceeded { max_pages: 3 };
        assert!(err.to_string().contains("after 3 pages"));
    }

    #[test]
    fn test_is_client_error() {
        assert!(Error::http_status(404, "").is_client_error());
        assert!(Error::api(422, Some("unprocessable_entity".to_string()), "bad").is_client_error());

        assert!(!Error::http_status(500, "").is_client_error());
        assert!(!Error::config("test").is_client_error());
        assert!(!Error::PageLimitExceeded { max_pages: 1 }.is_client_error());
    }
}
