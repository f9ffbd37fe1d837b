//! Error types for Bookshelf Core

use crate::types::{ApiErrors, FieldError};
use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias using BookshelfError
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Top-level error type for all Bookshelf operations
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// The library service answered with a status >= 400
    #[error("API error ({status}): {}", .errors.message())]
    Api { status: StatusCode, errors: ApiErrors },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BookshelfError {
    /// Build an API error from a raw error body.
    ///
    /// Bodies that are not an `{errors: [...]}` envelope are replaced by a single
    /// error carrying the status reason.
    pub fn from_response_body(status: StatusCode, body: &[u8]) -> Self {
        let errors = match serde_json::from_slice::<ApiErrors>(body) {
            Ok(errors) if !errors.errors.is_empty() => errors,
            _ => ApiErrors {
                errors: vec![FieldError {
                    field: String::new(),
                    message: status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string(),
                }],
            },
        };
        Self::Api { status, errors }
    }

    /// Whether this error came back from the service rather than the transport
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// User-facing notification (rendered as a toast by the web front-end)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Turn a failed fetch into a notice.
    ///
    /// Only service errors are shown to the user. Transport and decode failures
    /// are logged and yield `None`.
    pub fn from_error(title: &str, err: &BookshelfError) -> Option<Self> {
        match err {
            BookshelfError::Api { errors, .. } => {
                let message = errors.message();
                tracing::error!(title, status = ?err.status(), "{}", message);
                Some(Self::error(title, message))
            }
            other => {
                tracing::error!(title, "{}", other);
                None
            }
        }
    }
}
